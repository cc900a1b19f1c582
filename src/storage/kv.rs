//! String key/value stores backing the ruler state.

use super::error::StoreError;
use fs2::FileExt;
use log::{debug, warn};
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Synchronous string storage, modelled on browser local storage.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store keeping one `<key>.json` file per key inside a directory.
///
/// Writes take an exclusive lock on `<key>.lock`, write a temporary file and
/// rename it over the previous value, so readers never see a partial file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn value_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn lock_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.lock"))
    }

    fn lock(&self, key: &str) -> Result<File, StoreError> {
        let lock_path = self.lock_path(key);
        let lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;
        FileExt::lock_exclusive(&lock_file).map_err(|source| StoreError::Lock {
            path: lock_path,
            source,
        })?;
        Ok(lock_file)
    }

    fn release(&self, key: &str, lock_file: File) {
        FileExt::unlock(&lock_file).unwrap_or_else(|err| {
            warn!(
                "failed to unlock {}: {}",
                self.lock_path(key).display(),
                err
            )
        });
    }

    fn write_value(&self, path: &Path, value: &str) -> Result<(), StoreError> {
        let tmp_path = temp_path(path);
        {
            let mut tmp_file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&tmp_path)?;
            tmp_file.write_all(value.as_bytes())?;
            tmp_file.sync_all()?;
        }
        if let Err(err) = fs::rename(&tmp_path, path) {
            fs::remove_file(&tmp_path).ok();
            return Err(err.into());
        }
        debug!("Wrote {} ({} bytes)", path.display(), value.len());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.value_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No stored value at {}", path.display());
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.value_path(key)?;
        fs::create_dir_all(&self.dir)?;

        let lock_file = self.lock(key)?;
        let result = self.write_value(&path, value);
        self.release(key, lock_file);
        result
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

fn temp_path(target: &Path) -> PathBuf {
    let mut candidate = target.with_extension("json.tmp");
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_extension(format!("json.tmp{}", counter));
    }
    candidate
}
