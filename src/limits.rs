//! Field bounds and submission defaults.
//!
//! Every size, count and range constraint used by the schemas lives here,
//! so the messages built from them and the tests asserting on them agree.

// ============================================================================
// Shared
// ============================================================================

/// Maximum number of tags on a collection or recipe.
pub const MAX_TAGS: usize = 10;

/// Maximum length of a single tag (after trimming).
pub const MAX_TAG_LENGTH: usize = 30;

// ============================================================================
// Collection wizard
// ============================================================================

/// Minimum collection name length (after trimming).
pub const MIN_COLLECTION_NAME_LENGTH: usize = 3;

/// Maximum collection name length (after trimming).
pub const MAX_COLLECTION_NAME_LENGTH: usize = 100;

/// Maximum collection description length.
pub const MAX_COLLECTION_DESCRIPTION_LENGTH: usize = 500;

/// Minimum number of recipes a collection must hold to be submitted.
pub const MIN_COLLECTION_RECIPES: usize = 1;

/// Maximum number of recipes per collection.
pub const MAX_COLLECTION_RECIPES: usize = 100;

/// Maximum number of collaborators per collection.
pub const MAX_COLLABORATORS: usize = 20;

// ============================================================================
// Recipe wizard
// ============================================================================

/// Minimum recipe title length (after trimming).
pub const MIN_RECIPE_TITLE_LENGTH: usize = 3;

/// Maximum recipe title length (after trimming).
pub const MAX_RECIPE_TITLE_LENGTH: usize = 200;

/// Maximum recipe description length.
pub const MAX_RECIPE_DESCRIPTION_LENGTH: usize = 2000;

/// Servings range.
pub const MIN_SERVINGS: u32 = 1;
/// Servings range.
pub const MAX_SERVINGS: u32 = 100;

/// Maximum preparation or cooking time, in minutes (24 hours).
pub const MAX_TIME_MINUTES: u32 = 1440;

/// Ingredient count range.
pub const MIN_INGREDIENTS: usize = 1;
/// Ingredient count range.
pub const MAX_INGREDIENTS: usize = 50;

/// Maximum ingredient name length.
pub const MAX_INGREDIENT_NAME_LENGTH: usize = 100;

/// Maximum ingredient quantity.
pub const MAX_INGREDIENT_QUANTITY: f64 = 10_000.0;

/// Maximum ingredient unit length.
pub const MAX_UNIT_LENGTH: usize = 20;

/// Instruction step count range.
pub const MIN_STEPS: usize = 1;
/// Instruction step count range.
pub const MAX_STEPS: usize = 50;

/// Maximum instruction length.
pub const MAX_INSTRUCTION_LENGTH: usize = 2000;

/// Maximum per-step timer, in seconds (24 hours).
pub const MAX_STEP_DURATION_SECONDS: u32 = 86_400;

/// Servings sent to the API when the form left them blank.
pub const DEFAULT_SERVINGS: u32 = 4;
