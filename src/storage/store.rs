//! Key-value store with optional file persistence.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;

use crate::storage::StorageError;

/// String key-value store, the local equivalent of browser storage.
///
/// Clones share the same map. With a persistence path every write is flushed
/// to disk as a flat JSON object; without one the store lives in memory only.
#[derive(Clone, Default)]
pub struct LocalStore {
    inner: Arc<DashMap<String, String>>,
    persistence_path: Option<PathBuf>,
}

impl LocalStore {
    /// Create a new empty store.
    pub fn new(persistence_path: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            persistence_path,
        }
    }

    /// Open the store at `path`, loading existing entries if the file exists.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let store = Self::new(Some(path.to_path_buf()));
        if path.exists() {
            let file = File::open(path).map_err(|source| StorageError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let map: HashMap<String, String> = serde_json::from_reader(BufReader::new(file))
                .map_err(|source| StorageError::Corrupt {
                    path: path.to_path_buf(),
                    source,
                })?;

            for (k, v) in map {
                store.inner.insert(k, v);
            }
            tracing::debug!(path = %path.display(), entries = store.inner.len(), "Loaded storage file");
        }
        Ok(store)
    }

    pub fn persistence_path(&self) -> Option<&Path> {
        self.persistence_path.as_deref()
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|r| r.value().clone())
    }

    /// Set `key` and flush to disk when persistent.
    pub fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.inner.insert(key.to_string(), value);
        self.save()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Write all entries to the persistence path via a temp file and rename.
    pub fn save(&self) -> Result<(), StorageError> {
        let Some(path) = &self.persistence_path else {
            return Ok(());
        };
        let io_err = |source: std::io::Error| StorageError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let map: HashMap<_, _> = self
            .inner
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();

        let tmp = path.with_extension("json.tmp");
        {
            let file = File::create(&tmp).map_err(io_err)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &map).map_err(|source| {
                StorageError::Serialize {
                    path: path.clone(),
                    source,
                }
            })?;
            writer.flush().map_err(io_err)?;
        }
        fs::rename(&tmp, path).map_err(io_err)?;

        tracing::debug!(path = %path.display(), entries = map.len(), "Saved storage file");
        Ok(())
    }
}
