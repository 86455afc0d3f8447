//! Key-value persistence for the session store.
//!
//! The session store only needs three synchronous operations on string
//! blobs under string keys. `FileStorage` is the production backend (one
//! JSON file per key in the application data directory); `MemoryStorage`
//! backs the tests.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Synchronous key-value store. Values survive process restarts with the
/// file backend; keys never expire.
pub trait Storage {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// File-backed storage: each key maps to `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> io::Result<Self> {
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path).map(Some)
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        std::fs::write(self.entry_path(key), value)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let path = self.entry_path(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory storage for tests. Clones share the same underlying map, so
/// a test can hand one clone to a store and keep another to simulate a
/// process restart over the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
