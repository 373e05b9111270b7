//! Create-collection wizard module.
//!
//! A **collection** groups existing recipes under a name, with optional
//! tags and collaborators. The wizard walks four steps:
//!
//! ```text
//! BASIC_INFO → RECIPES → COLLABORATORS → REVIEW
//! ```
//!
//! # Operations
//!
//! Section and whole-form validation come from the generic wizard functions
//! in [`crate::validation`]; this module supplies the schemas and payloads:
//!
//! - [`validate_collection_patch(patch)`](validate_collection_patch)
//! - [`to_create_request(validated)`](to_create_request)
//! - [`to_update_request(patch)`](to_update_request)

pub mod request;
pub mod types;
pub mod validation;

pub use request::{
    to_create_request, to_update_request, CollectionRecipeInput, CreateCollectionRequest,
    UpdateCollectionRequest,
};
pub use types::{
    CollaborationMode, CollaboratorRef, CollectionFormData, CollectionFormPatch, CollectionStep,
    RecipeRef, Visibility,
};
pub use validation::{validate_collection_patch, COLLABORATORS_REQUIRED_MESSAGE};
