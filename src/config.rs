//! Configuration for the draft store.
//!
//! The [`Config`] struct controls how drafts are identified and persisted:
//! - Storage key the draft is saved under
//! - Namespace prefix for generated draft ids
//! - Whether every mutation is written through to storage
//!
//! # Example
//! ```rust
//! use recipeforms::Config;
//!
//! // Use defaults
//! let config = Config::default();
//!
//! // One draft slot per wizard
//! let config = Config {
//!     storage_key: "create-recipe-draft".into(),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use crate::error::FormError;

/// Default storage key for the collection wizard draft.
pub const DEFAULT_STORAGE_KEY: &str = "create-collection-draft";

/// Default prefix for generated draft ids.
pub const DEFAULT_DRAFT_ID_PREFIX: &str = "draft";

/// Draft store configuration options.
///
/// All fields have sensible defaults. Use struct update syntax to override
/// specific settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Key the draft state is persisted under.
    pub storage_key: String,

    /// Namespace prefix for ids produced by
    /// [`DraftStore::generate_draft_id`](crate::DraftStore::generate_draft_id).
    pub draft_id_prefix: String,

    /// Write the state through to storage after every change.
    ///
    /// When false, the caller persists explicitly with
    /// [`DraftStore::persist`](crate::DraftStore::persist).
    /// Default: true
    pub persist_on_mutation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            draft_id_prefix: DEFAULT_DRAFT_ID_PREFIX.to_string(),
            persist_on_mutation: true,
        }
    }
}

impl Config {
    /// Creates a new Config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the configuration.
    ///
    /// Called by the [`DraftStore`](crate::DraftStore) constructors.
    ///
    /// # Errors
    /// Returns [`FormError::Config`] if:
    /// - `storage_key` is blank
    /// - `draft_id_prefix` is empty or contains anything but ASCII
    ///   alphanumerics and hyphens (`_` separates prefix from the id body)
    pub fn validate(&self) -> Result<(), FormError> {
        if self.storage_key.trim().is_empty() {
            return Err(FormError::config("storage_key must not be empty"));
        }

        if self.draft_id_prefix.is_empty() {
            return Err(FormError::config("draft_id_prefix must not be empty"));
        }

        if !self
            .draft_id_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(FormError::config(format!(
                "draft_id_prefix may only contain ASCII letters, digits and hyphens, got '{}'",
                self.draft_id_prefix
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.draft_id_prefix, DEFAULT_DRAFT_ID_PREFIX);
        assert!(config.persist_on_mutation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_storage_key_rejected() {
        let config = Config {
            storage_key: "   ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("storage_key"));
    }

    #[test]
    fn test_prefix_with_separator_rejected() {
        let config = Config {
            draft_id_prefix: "my_draft".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_prefix_with_hyphen_accepted() {
        let config = Config {
            draft_id_prefix: "recipe-draft".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
