//! redb-backed draft storage.
//!
//! Drafts live in a single [redb](https://docs.rs/redb) table keyed by the
//! store's storage key. Each call opens and commits its own transaction.

use std::path::{Path, PathBuf};

use ::redb::Database;
use tracing::{debug, info, instrument};

use super::schema::{PersistedDraft, DRAFTS_TABLE, SCHEMA_VERSION};
use super::DraftStorage;
use crate::error::{Result, StorageError};

/// File-backed [`DraftStorage`].
///
/// `RedbStorage` is `Send + Sync`; redb serializes writers internally.
#[derive(Debug)]
pub struct RedbStorage {
    db: Database,
    path: PathBuf,
}

impl RedbStorage {
    /// Opens or creates a draft file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is corrupted or another process holds
    /// the lock.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use recipeforms::storage::RedbStorage;
    ///
    /// let storage = RedbStorage::open("./drafts.redb")?;
    /// # Ok::<(), recipeforms::FormError>(())
    /// ```
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(exists = path.exists(), "Opening draft storage");

        // redb has no typed lock-conflict variant; match on the message
        let db = Database::create(path).map_err(|e| {
            if e.to_string().contains("locked") {
                StorageError::Locked
            } else {
                StorageError::from(e)
            }
        })?;

        // Create the table up front so reads on a fresh file succeed
        let write_txn = db.begin_write().map_err(StorageError::from)?;
        {
            let _ = write_txn.open_table(DRAFTS_TABLE)?;
        }
        write_txn.commit().map_err(StorageError::from)?;

        info!(schema_version = SCHEMA_VERSION, "Draft storage ready");
        Ok(Self {
            db,
            path: path.to_path_buf(),
        })
    }
}

impl DraftStorage for RedbStorage {
    #[instrument(skip(self))]
    fn load(&self, key: &str) -> Result<Option<PersistedDraft>> {
        let read_txn = self.db.begin_read().map_err(StorageError::from)?;
        let table = read_txn.open_table(DRAFTS_TABLE)?;

        match table.get(key)? {
            Some(value) => {
                let draft = PersistedDraft::decode(value.value())?;
                debug!(has_draft = draft.state.draft_collection.is_some(), "Draft loaded");
                Ok(Some(draft))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, draft))]
    fn save(&self, key: &str, draft: &PersistedDraft) -> Result<()> {
        let bytes = draft.encode()?;

        let write_txn = self.db.begin_write().map_err(StorageError::from)?;
        {
            let mut table = write_txn.open_table(DRAFTS_TABLE)?;
            table.insert(key, bytes.as_slice())?;
        }
        write_txn.commit().map_err(StorageError::from)?;

        debug!(bytes = bytes.len(), "Draft saved");
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&self, key: &str) -> Result<bool> {
        let write_txn = self.db.begin_write().map_err(StorageError::from)?;
        let existed;
        {
            let mut table = write_txn.open_table(DRAFTS_TABLE)?;
            existed = table.remove(key)?.is_some();
        }
        write_txn.commit().map_err(StorageError::from)?;

        if existed {
            debug!("Draft removed");
        }
        Ok(existed)
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
