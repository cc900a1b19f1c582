//! Guide line persistence.
//!
//! Guide lines are grouped per artboard and stored as a single JSON object
//! under [`STORAGE_KEY`] in a [`KeyValueStore`]. Decoration is never stored.

mod error;
mod guides;
mod kv;

pub use error::StoreError;
pub use guides::{GuideStore, RulerState, deduplicate};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

/// Key holding the ruler state.
pub const STORAGE_KEY: &str = "ruler";
