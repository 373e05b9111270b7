//! Error types for recipe-forms.
//!
//! recipe-forms separates two kinds of failure:
//! - **User-facing validation failures** are plain values ([`ValidationErrors`]).
//!   Validators return them, they never panic or abort, and every message is
//!   addressed to a field path so the UI can render it next to the input.
//! - **Programmer errors and I/O** go through [`FormError`], the top-level
//!   error returned by the fallible public APIs.
//!
//! # Error Handling Pattern
//! ```rust,ignore
//! use recipeforms::{collection, validate_whole_form, Result};
//!
//! fn submit(form: &collection::CollectionFormData) -> Result<()> {
//!     let validated = validate_whole_form(form)?; // ValidationErrors -> FormError
//!     let request = collection::to_create_request(&validated);
//!     // ... hand `request` to the HTTP client ...
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Result type alias for recipe-forms operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Top-level error enum for recipe-forms.
///
/// Validation *failures* only show up here when the caller converts them
/// with `?`; the validators themselves return [`ValidationErrors`] directly.
#[derive(Debug, Error)]
pub enum FormError {
    /// The submitted form failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A validator was called with a value of the wrong shape.
    ///
    /// This is a bug in the calling code, not a user-correctable condition.
    #[error("Schema violation at '{path}': {constraint}")]
    SchemaViolation {
        /// Field path of the offending value.
        path: String,
        /// The constraint the value could not even be checked against.
        constraint: String,
    },

    /// Persisted draft storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of what's wrong with the configuration.
        reason: String,
    },
}

impl FormError {
    /// Creates a schema violation error.
    pub fn schema_violation(path: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::SchemaViolation {
            path: path.into(),
            constraint: constraint.into(),
        }
    }

    /// Creates a configuration error with the given reason.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a schema violation (misuse).
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Self::SchemaViolation { .. })
    }

    /// Returns true if this is a storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Errors raised by a [`DraftStorage`](crate::storage::DraftStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Persisted data could not be decoded.
    #[error("Draft storage corrupted: {0}")]
    Corrupted(String),

    /// The storage file is locked by another process.
    #[error("Draft storage is locked by another writer")]
    Locked,

    /// Transaction failed (commit, rollback, etc.).
    #[error("Transaction failed: {0}")]
    Transaction(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error from the redb storage engine.
    #[error("Storage engine error: {0}")]
    Redb(String),

    /// Persisted draft was written by an incompatible version.
    #[error("Schema version mismatch: expected {expected}, found {found}")]
    SchemaVersionMismatch {
        /// Expected schema version.
        expected: u32,
        /// Version found in the persisted entry.
        found: u32,
    },
}

impl StorageError {
    /// Creates a corruption error with the given message.
    pub fn corrupted(msg: impl Into<String>) -> Self {
        Self::Corrupted(msg.into())
    }

    /// Creates a transaction error with the given message.
    pub fn transaction(msg: impl Into<String>) -> Self {
        Self::Transaction(msg.into())
    }
}

impl From<redb::Error> for StorageError {
    fn from(err: redb::Error) -> Self {
        StorageError::Redb(err.to_string())
    }
}

impl From<redb::DatabaseError> for StorageError {
    fn from(err: redb::DatabaseError) -> Self {
        StorageError::Redb(err.to_string())
    }
}

impl From<redb::TransactionError> for StorageError {
    fn from(err: redb::TransactionError) -> Self {
        StorageError::Transaction(err.to_string())
    }
}

impl From<redb::CommitError> for StorageError {
    fn from(err: redb::CommitError) -> Self {
        StorageError::Transaction(format!("Commit failed: {}", err))
    }
}

impl From<redb::TableError> for StorageError {
    fn from(err: redb::TableError) -> Self {
        StorageError::Redb(format!("Table error: {}", err))
    }
}

impl From<redb::StorageError> for StorageError {
    fn from(err: redb::StorageError) -> Self {
        StorageError::Redb(format!("Storage error: {}", err))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<redb::Error> for FormError {
    fn from(err: redb::Error) -> Self {
        FormError::Storage(StorageError::from(err))
    }
}

impl From<redb::TransactionError> for FormError {
    fn from(err: redb::TransactionError) -> Self {
        FormError::Storage(StorageError::from(err))
    }
}

impl From<redb::CommitError> for FormError {
    fn from(err: redb::CommitError) -> Self {
        FormError::Storage(StorageError::from(err))
    }
}

impl From<redb::TableError> for FormError {
    fn from(err: redb::TableError) -> Self {
        FormError::Storage(StorageError::from(err))
    }
}

impl From<redb::StorageError> for FormError {
    fn from(err: redb::StorageError) -> Self {
        FormError::Storage(StorageError::from(err))
    }
}

// ============================================================================
// Field-level validation issues
// ============================================================================

/// A single failed rule, attached to the field it is actionable on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    /// Dotted field path, e.g. `name`, `tags.2`, `recipes.0.recipeTitle`.
    pub path: String,
    /// Human-readable message, ready for display.
    pub message: String,
}

impl Issue {
    /// Creates a new issue.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true if this issue belongs to `field` or one of its children.
    ///
    /// `recipes.1.recipeId` belongs to `recipes`; `recipesCount` does not.
    pub fn belongs_to(&self, field: &str) -> bool {
        match self.path.strip_prefix(field) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// An ordered, non-empty set of validation issues.
///
/// Issues keep the order in which validators discovered them, which is
/// field declaration order within a section and step order across sections.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", summarize(.issues))]
pub struct ValidationErrors {
    issues: Vec<Issue>,
}

fn summarize(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(Issue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Builds a set from collected issues. Returns `None` when there are none.
    pub fn from_issues(issues: Vec<Issue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    /// Creates a set holding exactly one issue.
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue::new(path, message)],
        }
    }

    /// All issues in discovery order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// The first issue discovered.
    pub fn first(&self) -> Option<&Issue> {
        self.issues.first()
    }

    /// Flattens issues to display strings, in discovery order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.message.clone()).collect()
    }

    /// Messages attached to `field` or any path beneath it.
    pub fn for_field(&self, field: &str) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|i| i.belongs_to(field))
            .map(|i| i.message.as_str())
            .collect()
    }

    /// Groups messages by exact field path.
    ///
    /// Within each path, messages keep discovery order.
    pub fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for issue in &self.issues {
            map.entry(issue.path.clone())
                .or_default()
                .push(issue.message.clone());
        }
        map
    }
}
