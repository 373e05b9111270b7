//! API payloads for recipe creation and update.

use serde::{Deserialize, Serialize};

use super::types::{IngredientEntry, RecipeFormData, RecipeFormPatch, StepEntry};
use crate::collection::Visibility;
use crate::limits::DEFAULT_SERVINGS;
use crate::validation::Validated;

/// An ingredient line as the API expects it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientInput {
    /// Ingredient name.
    pub name: String,
    /// Amount, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of `quantity`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// An instruction step as the API expects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStepInput {
    /// 1-based position.
    pub step_number: u32,
    /// What to do.
    pub instruction: String,
    /// Optional timer, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer_seconds: Option<u32>,
}

/// Body of the create-recipe call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    /// Title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Servings, never absent in a create payload.
    pub servings: u32,
    /// Preparation time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<u32>,
    /// Cooking time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
    /// Visibility.
    pub visibility: Visibility,
    /// Tags.
    pub tags: Vec<String>,
    /// Ingredient lines.
    pub ingredients: Vec<RecipeIngredientInput>,
    /// Steps in order.
    pub steps: Vec<RecipeStepInput>,
}

/// Body of the update-recipe call. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description; `Some(None)` clears it.
    #[serde(
        default,
        deserialize_with = "crate::types::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    /// New servings; `Some(None)` clears it.
    #[serde(
        default,
        deserialize_with = "crate::types::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub servings: Option<Option<u32>>,
    /// New preparation time.
    #[serde(
        default,
        deserialize_with = "crate::types::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub preparation_time: Option<Option<u32>>,
    /// New cooking time.
    #[serde(
        default,
        deserialize_with = "crate::types::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub cooking_time: Option<Option<u32>>,
    /// New visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Replacement tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Replacement ingredients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<RecipeIngredientInput>>,
    /// Replacement steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<RecipeStepInput>>,
}

fn ingredient_inputs(ingredients: &[IngredientEntry]) -> Vec<RecipeIngredientInput> {
    ingredients
        .iter()
        .map(|i| RecipeIngredientInput {
            name: i.name.clone(),
            quantity: i.quantity,
            unit: i.unit.clone(),
        })
        .collect()
}

fn step_inputs(steps: &[StepEntry]) -> Vec<RecipeStepInput> {
    steps
        .iter()
        .map(|s| RecipeStepInput {
            step_number: s.step_number,
            instruction: s.instruction.clone(),
            timer_seconds: s.duration,
        })
        .collect()
}

/// Builds the create payload from a validated recipe.
///
/// Servings fall back to [`DEFAULT_SERVINGS`] when the user never entered
/// them. Every other field is carried as-is.
pub fn to_create_recipe_request(form: &Validated<RecipeFormData>) -> CreateRecipeRequest {
    CreateRecipeRequest {
        title: form.title.clone(),
        description: form.description.clone(),
        servings: form.servings.unwrap_or(DEFAULT_SERVINGS),
        preparation_time: form.prep_time,
        cooking_time: form.cook_time,
        visibility: form.visibility,
        tags: form.tags.clone(),
        ingredients: ingredient_inputs(&form.ingredients),
        steps: step_inputs(&form.steps),
    }
}

/// Builds the update payload from a patch. Only present fields are included.
pub fn to_update_recipe_request(patch: &RecipeFormPatch) -> UpdateRecipeRequest {
    UpdateRecipeRequest {
        title: patch.title.clone(),
        description: patch.description.clone(),
        servings: patch.servings,
        preparation_time: patch.prep_time,
        cooking_time: patch.cook_time,
        visibility: patch.visibility,
        tags: patch.tags.clone(),
        ingredients: patch.ingredients.as_deref().map(ingredient_inputs),
        steps: patch.steps.as_deref().map(step_inputs),
    }
}
