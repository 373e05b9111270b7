//! # recipe-forms
//!
//! Validation engine and draft store for multi-step recipe and collection
//! creation wizards.
//!
//! recipe-forms checks wizard input one field, one section, or one whole
//! form at a time, returning field-addressed messages a UI can render as-is.
//! It also keeps the in-progress draft between steps, with the structural
//! invariants (dense display order, no duplicate recipes, collaborators or
//! tags) held after every edit.
//!
//! ## Quick Start
//!
//! ```rust
//! use recipeforms::prelude::*;
//!
//! let mut store = DraftStore::new(Config::default())?;
//! store.initialize_draft();
//! store.update_draft_name("  Sunday Roasts ");
//! store.add_draft_recipe(RecipeRef::new("r1", 12, "Roast Chicken"));
//!
//! // Gate the "next" button on everything up to the current step
//! let draft = store.draft().unwrap().clone();
//! validate_steps_up_to(CollectionStep::Recipes, &draft).unwrap();
//!
//! // Submit
//! let validated = validate_whole_form(&draft)?;
//! let request = to_create_request(&validated);
//! assert_eq!(request.name, "Sunday Roasts");
//! # Ok::<(), recipeforms::FormError>(())
//! ```
//!
//! ## Key Concepts
//!
//! ### Wizard steps
//!
//! Each wizard is an ordered enumeration of steps ([`CollectionStep`],
//! [`RecipeStep`]). Every step but the last maps to a section schema;
//! `REVIEW` has nothing to check and always passes.
//!
//! ### Validation results
//!
//! User mistakes are values: [`ValidationErrors`] lists [`Issue`]s, each a
//! dotted field path plus message. Only misuse of the API (a value of the
//! wrong shape) is an error proper, reported as
//! [`FormError::SchemaViolation`].
//!
//! ### Validated forms
//!
//! Whole-form validation yields a [`Validated`] form holding the trimmed
//! values. Create requests can only be built from one.
//!
//! ## Thread Safety
//!
//! Validation is pure and every schema is a `static`. [`DraftStore`] is a
//! plain owned value; storage backends are `Send + Sync`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

// ============================================================================
// Module declarations
// ============================================================================

mod config;
mod error;
mod types;

pub mod limits;
pub mod storage;
pub mod validation;

// Domain modules
pub mod collection;
pub mod draft;
pub mod recipe;

// ============================================================================
// Public API re-exports
// ============================================================================

// Draft store
pub use draft::{DraftState, DraftStore};

// Configuration
pub use config::Config;

// Error handling
pub use error::{FormError, Issue, Result, StorageError, ValidationErrors};

// Core types
pub use types::{DraftId, Timestamp};

// Validation engine
pub use validation::{
    validate_field, validate_section, validate_section_by_id, validate_steps_up_to,
    validate_whole_form, FieldKind, FieldOutcome, FieldValue, StepFailure, Validated, WizardForm,
    WizardStep,
};

// Wizards
pub use collection::{CollectionFormData, CollectionStep};
pub use recipe::{RecipeFormData, RecipeStep};

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Convenient imports for common recipe-forms usage.
///
/// ```rust
/// use recipeforms::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{
        to_create_request, CollaborationMode, CollaboratorRef, CollectionFormData, CollectionStep,
        RecipeRef, Visibility,
    };
    pub use crate::config::Config;
    pub use crate::draft::DraftStore;
    pub use crate::error::{FormError, Result, ValidationErrors};
    pub use crate::recipe::{
        to_create_recipe_request, IngredientEntry, RecipeFormData, RecipeStep, StepEntry,
    };
    pub use crate::validation::{
        validate_section, validate_steps_up_to, validate_whole_form, WizardStep,
    };
}
