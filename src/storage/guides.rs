use super::STORAGE_KEY;
use super::error::StoreError;
use super::kv::KeyValueStore;
use crate::ruler::GuideLine;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Guide lines of every artboard, keyed by artboard id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RulerState(BTreeMap<String, Vec<GuideLine>>);

impl RulerState {
    /// Parses a stored blob.
    ///
    /// Artboard entries that do not hold a list of guide lines are dropped
    /// with a warning; the remaining artboards are kept.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(raw)?;
        let mut state = Self::default();
        for (artboard, value) in entries {
            match serde_json::from_value::<Vec<GuideLine>>(value) {
                Ok(lines) => {
                    state.0.insert(artboard, lines);
                }
                Err(err) => warn!("Dropping malformed guide lines for artboard {artboard}: {err}"),
            }
        }
        Ok(state)
    }

    pub fn get(&self, artboard: &str) -> Option<&[GuideLine]> {
        self.0.get(artboard).map(Vec::as_slice)
    }

    pub fn insert(&mut self, artboard: impl Into<String>, lines: Vec<GuideLine>) {
        self.0.insert(artboard.into(), lines);
    }

    pub fn remove(&mut self, artboard: &str) -> Option<Vec<GuideLine>> {
        self.0.remove(artboard)
    }

    pub fn artboards(&self) -> impl Iterator<Item = (&str, &[GuideLine])> + '_ {
        self.0
            .iter()
            .map(|(artboard, lines)| (artboard.as_str(), lines.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Keeps the first guide line for each id, preserving order.
pub fn deduplicate(lines: &[GuideLine]) -> Vec<GuideLine> {
    let mut seen = HashSet::new();
    lines
        .iter()
        .filter(|line| seen.insert(line.id.as_str()))
        .cloned()
        .collect()
}

/// Reads and writes [`RulerState`] through a [`KeyValueStore`].
///
/// The whole state is one JSON object under [`STORAGE_KEY`]; every write
/// rewrites it.
#[derive(Debug, Clone, Default)]
pub struct GuideStore<K> {
    store: K,
}

impl<K: KeyValueStore> GuideStore<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn into_inner(self) -> K {
        self.store
    }

    /// Current state. Missing, unreadable, or malformed data reads as empty.
    pub fn read(&self) -> RulerState {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return RulerState::default(),
            Err(err) => {
                warn!("Failed to read ruler state: {err}");
                return RulerState::default();
            }
        };
        if raw.trim().is_empty() {
            return RulerState::default();
        }
        RulerState::parse(&raw).unwrap_or_else(|err| {
            warn!("Ignoring malformed ruler state: {err}");
            RulerState::default()
        })
    }

    /// Stored guides of one artboard, deduplicated. Empty when none exist.
    pub fn guides(&self, artboard: &str) -> Vec<GuideLine> {
        self.read().get(artboard).map(deduplicate).unwrap_or_default()
    }

    /// Replaces the guides of `artboard`, leaving other artboards untouched.
    pub fn write(&mut self, artboard: &str, lines: &[GuideLine]) -> Result<(), StoreError> {
        let mut state = self.read();
        let lines = deduplicate(lines);
        debug!("Persisting {} guide(s) for artboard {}", lines.len(), artboard);
        state.insert(artboard, lines);
        self.save(&state)
    }

    /// Forgets every guide of `artboard`.
    ///
    /// Returns `false` when the artboard had no stored entry.
    pub fn delete(&mut self, artboard: &str) -> Result<bool, StoreError> {
        let mut state = self.read();
        if state.remove(artboard).is_none() {
            debug!("No stored guides for artboard {artboard}");
            return Ok(false);
        }
        self.save(&state)?;
        Ok(true)
    }

    fn save(&mut self, state: &RulerState) -> Result<(), StoreError> {
        let json = serde_json::to_string(state)?;
        self.store.set(STORAGE_KEY, &json)
    }
}
