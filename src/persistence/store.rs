use super::error::PersistError;
use super::files::{atomic_write, read_file};
use std::path::PathBuf;

/// Durable string key-value storage
pub trait KeyValueStore {
    /// Read the value stored at `key`, None when absent
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Overwrite the value stored at `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), PersistError>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let path = self.path_for(key);
        read_file(&path).map_err(|e| PersistError::Read {
            path,
            reason: format!("{:#}", e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        let path = self.path_for(key);
        atomic_write(&path, value).map_err(|e| PersistError::Write {
            path,
            reason: format!("{:#}", e),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PersistError::Remove { path, source }),
        }
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub entries: std::collections::HashMap<String, String>,
    pub writes: usize,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        self.entries.remove(key);
        Ok(())
    }
}
