//! Key-value storage capability and the backends shipped with it.
//!
//! The contract is deliberately tiny: `get` returns the stored string or
//! nothing (read failures count as absent), `set` may fail. Browser
//! localStorage, a directory of files, and a plain `HashMap` all satisfy it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// Durable (or not) string-to-string storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any. A backend that cannot read
    /// reports absence rather than an error.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Shared handle to a storage backend.
///
/// The history store and the language preference write through the same
/// backend; the app runs on a single thread (one logical actor, no
/// overlapping calls), so `Rc<RefCell<..>>` is all the sharing needed.
pub type SharedStorage = Rc<RefCell<dyn KeyValueStore>>;

/// Wrap a backend into a [`SharedStorage`] handle.
pub fn shared<S: KeyValueStore + 'static>(store: S) -> SharedStorage {
    Rc::new(RefCell::new(store))
}

/// In-memory backend for tests and as a fallback when no durable backend is
/// available. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-per-key backend rooted at a directory, for native targets.
///
/// Each key maps to one file directly under the root; keys are fixed
/// application constants, never user input.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct DirStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirStore {
    pub fn new(dir: std::path::PathBuf) -> Self {
        Self { dir }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.dir.join(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(key), value)?;
        Ok(())
    }
}
