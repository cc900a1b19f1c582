use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](super::KeyValueStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialise ruler state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
}
