//! Key-value media that records are persisted into.
//!
//! A medium stores string values under string keys. Each `set` replaces
//! the whole value at once; a reader never sees half of a write.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::KvError;

/// A persistent string-to-string store.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), KvError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), KvError> {
        (**self).remove(key)
    }
}
