//! Persisted draft layout and versioning.
//!
//! # Schema Versioning
//!
//! Every entry carries the schema version it was written with. Loading an
//! entry with a different version fails with
//! [`StorageError::SchemaVersionMismatch`]; there is no migration.
//!
//! # Table Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ DRAFTS_TABLE                                                 │
//! │   Key: &str (storage key, e.g. "create-collection-draft")   │
//! │   Value: &[u8] (JSON-encoded PersistedDraft)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use redb::TableDefinition;
use serde::{Deserialize, Serialize};

use crate::draft::DraftState;
use crate::error::StorageError;

/// Current schema version.
///
/// Increment this when making breaking changes to [`PersistedDraft`].
pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Table Definitions
// ============================================================================

/// Drafts table: one entry per storage key.
pub const DRAFTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("drafts");

// ============================================================================
// Envelope
// ============================================================================

/// A draft store snapshot as written to storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedDraft {
    /// Schema version the entry was written with.
    pub version: u32,

    /// The store fields, inlined next to `version`.
    #[serde(flatten)]
    pub state: DraftState,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl PersistedDraft {
    /// Wraps a state snapshot with the current schema version.
    pub fn new(state: DraftState) -> Self {
        Self {
            version: SCHEMA_VERSION,
            state,
        }
    }

    /// Consumes the envelope, returning the state.
    pub fn into_state(self) -> DraftState {
        self.state
    }

    /// Encodes the envelope as JSON bytes.
    pub fn encode(&self) -> Result<Vec<u8>, StorageError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decodes an envelope, checking the version before the body.
    pub fn decode(bytes: &[u8]) -> Result<Self, StorageError> {
        let probe: VersionProbe = serde_json::from_slice(bytes)
            .map_err(|e| StorageError::corrupted(format!("Invalid draft envelope: {}", e)))?;

        if probe.version != SCHEMA_VERSION {
            return Err(StorageError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found: probe.version,
            });
        }

        serde_json::from_slice(bytes)
            .map_err(|e| StorageError::corrupted(format!("Invalid draft body: {}", e)))
    }
}
