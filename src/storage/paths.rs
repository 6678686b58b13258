//! Default location of the storage file.
//!
//! Lives under the OS local data directory; `VISITOR_COUNTER_HOME` overrides
//! the base for portable setups and tests.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::storage::StorageError;

pub const APP_DIR_NAME: &str = "visitor-counter";
pub const STORAGE_FILE_NAME: &str = "storage.json";
pub const HOME_ENV: &str = "VISITOR_COUNTER_HOME";

/// Resolve the storage file under `$VISITOR_COUNTER_HOME` or the local data dir.
pub fn default_storage_path() -> Result<PathBuf, StorageError> {
    let base = match std::env::var_os(HOME_ENV) {
        Some(path) => PathBuf::from(path),
        None => BaseDirs::new()
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .ok_or(StorageError::NoDataDir)?,
    };
    Ok(storage_path_under(&base))
}

/// `<base>/visitor-counter/storage.json`
pub fn storage_path_under(base: &Path) -> PathBuf {
    base.join(APP_DIR_NAME).join(STORAGE_FILE_NAME)
}
