//! Persistence of the last known count.
//!
//! # Data Flow
//! ```text
//! mount  → load_cached_count (read once, synchronous)
//! ready  → store_cached_count (write at most once per successful fetch)
//! ```
//!
//! The value is a base-10 string under a single key. Nothing ever deletes it.

pub mod paths;
pub mod store;

use std::path::PathBuf;

use thiserror::Error;

pub use paths::{default_storage_path, storage_path_under};
pub use store::LocalStore;

/// Errors from the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("storage file {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize storage file {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no data directory available for the storage file")]
    NoDataDir,
}

/// Read the cached count under `key`.
///
/// Anything other than a non-negative base-10 integer counts as absent.
pub fn load_cached_count(store: &LocalStore, key: &str) -> Option<u64> {
    let raw = store.get_item(key)?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, raw = %raw, "Ignoring non-numeric cached count");
            None
        }
    }
}

/// Persist `value` as the cached count under `key`.
pub fn store_cached_count(store: &LocalStore, key: &str, value: u64) -> Result<(), StorageError> {
    store.set_item(key, value.to_string())
}
