//! In-memory draft storage.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use super::schema::PersistedDraft;
use super::DraftStorage;
use crate::error::{FormError, Result, StorageError};

/// [`DraftStorage`] held in a map; entries go through the same JSON
/// encoding as the file backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    /// Creates empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores raw bytes under `key`, bypassing encoding.
    pub fn insert_raw(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        self.lock()?.insert(key.to_string(), bytes);
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        self.entries
            .lock()
            .map_err(|_| FormError::from(StorageError::transaction("memory storage lock poisoned")))
    }
}

impl DraftStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<PersistedDraft>> {
        match self.lock()?.get(key) {
            Some(bytes) => Ok(Some(PersistedDraft::decode(bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, draft: &PersistedDraft) -> Result<()> {
        let bytes = draft.encode()?;
        self.lock()?.insert(key.to_string(), bytes);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.lock()?.remove(key).is_some())
    }

    fn path(&self) -> Option<&Path> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftState;

    #[test]
    fn test_round_trip_and_remove() {
        let storage = MemoryStorage::new();
        let draft = PersistedDraft::new(DraftState::default());

        storage.save("k", &draft).unwrap();
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.load("k").unwrap(), Some(draft));

        assert!(storage.remove("k").unwrap());
        assert!(storage.is_empty());
        assert!(storage.path().is_none());
    }

    #[test]
    fn test_raw_entry_with_old_version_fails_to_load() {
        let storage = MemoryStorage::new();
        storage.insert_raw("k", br#"{"version":0}"#.to_vec()).unwrap();

        let err = storage.load("k").unwrap_err();
        assert!(err.is_storage());
    }
}
