//! Draft persistence.
//!
//! The draft store writes its state through a [`DraftStorage`] backend so a
//! half-finished wizard survives a restart. This is the local-storage
//! round-trip the UI relies on, behind a trait so tests can swap it out.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     DraftStore                               │
//! │                         │                                    │
//! │                         ▼                                    │
//! │              ┌─────────────────────┐                        │
//! │              │    DraftStorage     │  ← Trait               │
//! │              └─────────────────────┘                        │
//! │                    ▲         ▲                              │
//! │                    │         │                              │
//! │         ┌─────────┴─┐   ┌───┴───────────┐                  │
//! │         │RedbStorage│   │ MemoryStorage │                  │
//! │         └───────────┘   └───────────────┘                  │
//! │           (file)            (tests)                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod memory;
pub mod redb;
pub mod schema;

pub use self::memory::MemoryStorage;
pub use self::redb::RedbStorage;
pub use schema::{PersistedDraft, SCHEMA_VERSION};

use std::path::Path;

use crate::error::Result;

/// Key-value persistence for draft snapshots.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a store can be moved to, or
/// shared with, a background task.
pub trait DraftStorage: Send + Sync {
    /// Loads the entry stored under `key`.
    ///
    /// Returns `None` if nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be read or decoded, or was
    /// written with another schema version.
    fn load(&self, key: &str) -> Result<Option<PersistedDraft>>;

    /// Stores `draft` under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the write transaction or serialization fails.
    fn save(&self, key: &str, draft: &PersistedDraft) -> Result<()>;

    /// Removes the entry under `key`.
    ///
    /// Returns `true` if an entry existed.
    fn remove(&self, key: &str) -> Result<bool>;

    /// Returns the path of the backing file, if any.
    fn path(&self) -> Option<&Path>;
}

/// Opens file-backed draft storage at the given path.
///
/// Convenience wrapper around [`RedbStorage::open`].
///
/// # Errors
///
/// Returns an error if the file is corrupted or locked by another process.
pub fn open_storage(path: impl AsRef<Path>) -> Result<Box<dyn DraftStorage>> {
    let storage = RedbStorage::open(path)?;
    Ok(Box::new(storage))
}
