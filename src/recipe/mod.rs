//! Create-recipe wizard module.
//!
//! ```text
//! BASIC_INFO → INGREDIENTS → INSTRUCTIONS → REVIEW
//! ```
//!
//! Schemas plug into the generic wizard functions in [`crate::validation`];
//! submission goes through [`to_create_recipe_request`], which is where an
//! absent servings count falls back to
//! [`DEFAULT_SERVINGS`](crate::limits::DEFAULT_SERVINGS).

pub mod request;
pub mod types;
pub mod validation;

pub use request::{
    to_create_recipe_request, to_update_recipe_request, CreateRecipeRequest,
    RecipeIngredientInput, RecipeStepInput, UpdateRecipeRequest,
};
pub use types::{IngredientEntry, RecipeFormData, RecipeFormPatch, RecipeStep, StepEntry};
pub use validation::validate_recipe_patch;
