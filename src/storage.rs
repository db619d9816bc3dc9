use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read key {key}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write key {key}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize value for key {key}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed value stored under key {key}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage. Values are opaque blobs; a `set_item` replaces
/// whatever was stored under the key before.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Keeps each key in its own `<key>.json` file under `data_dir`.
#[derive(Debug)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    #[tracing::instrument(skip(data_dir))]
    pub fn open(data_dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(data_dir)?;
        debug!(data_dir = %data_dir.display(), "opened file store");
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
        })
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(data) => {
                debug!(file = %path.display(), bytes = data.len(), "read item");
                Ok(Some(data))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        write_atomic(&path, value).map_err(|source| StorageError::Write {
            key: key.to_string(),
            source,
        })?;
        debug!(file = %path.display(), bytes = value.len(), "wrote item");
        Ok(())
    }
}

fn write_atomic(path: &Path, value: &str) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(value.as_bytes())?;
    temp.flush()?;
    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get_item("tasks").unwrap().is_none());
    }

    #[test]
    fn set_item_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set_item("tasks", "[1]").unwrap();
        store.set_item("tasks", "[]").unwrap();

        assert_eq!(store.get_item("tasks").unwrap().as_deref(), Some("[]"));
        assert!(store.path_for("tasks").ends_with("tasks.json"));
    }

    #[test]
    fn open_creates_nested_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::open(&nested).unwrap();
        store.set_item("k", "v").unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn unreadable_key_reports_read_error() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        // A directory where the file should be cannot be read as a string.
        fs::create_dir(store.path_for("tasks")).unwrap();

        let err = store.get_item("tasks").unwrap_err();
        assert!(matches!(err, StorageError::Read { ref key, .. } if key == "tasks"));
    }

    #[test]
    fn memory_store_keeps_keys_apart() {
        let mut store = MemoryStore::new();
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();
        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get_item("b").unwrap().as_deref(), Some("2"));
        assert!(store.get_item("c").unwrap().is_none());
    }
}
