//! Key-value persistence boundary.
//!
//! A `Storage` maps slot names to strings, the same model as the browser's
//! `localStorage`. Collections decide what goes in a slot.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,
    #[error("Could not read '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("Could not save '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Synchronous slot storage. Implementations use interior mutability, as
/// the browser storage they model is shared and globally writable.
pub trait Storage {
    /// `Ok(None)` when nothing has been written to the slot yet.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Rc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// In-process storage. Clones share the same slots, like two handles on
/// one browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Raw contents of a slot.
    pub fn slot(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.slots.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slot(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_slots() -> Result<(), StorageError> {
        let a = MemoryStorage::new();
        let b = a.clone();
        assert_eq!(a.read("k")?, None);

        b.write("k", "[]")?;
        assert_eq!(a.read("k")?.as_deref(), Some("[]"));
        assert_eq!(a.keys(), vec!["k".to_string()]);
        Ok(())
    }

    #[test]
    fn test_rc_and_ref_delegate() -> Result<(), StorageError> {
        let storage = Rc::new(MemoryStorage::new().with_slot("a", "1"));
        assert_eq!(storage.read("a")?.as_deref(), Some("1"));
        let by_ref = &*storage;
        by_ref.write("b", "2")?;
        assert_eq!(storage.slot("b").as_deref(), Some("2"));
        Ok(())
    }
}
