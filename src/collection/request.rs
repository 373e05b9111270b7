//! API payloads for collection creation and update.
//!
//! Conversion is pure and performs no validation. Creation takes a
//! [`Validated`] form, so the only way to build a
//! [`CreateCollectionRequest`] is from a form that passed
//! [`validate_whole_form`](crate::validation::validate_whole_form).

use serde::{Deserialize, Serialize};

use super::types::{
    CollaborationMode, CollaboratorRef, CollectionFormData, CollectionFormPatch, RecipeRef,
    Visibility,
};
use crate::validation::Validated;

/// A recipe's membership in a collection, as the API expects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecipeInput {
    /// Server id of the recipe.
    pub recipe_id: i64,
    /// Position in the collection.
    pub display_order: u32,
}

/// Body of the create-collection call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionRequest {
    /// Collection name.
    pub name: String,
    /// Optional description; omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Visibility.
    pub visibility: Visibility,
    /// Collaboration mode.
    pub collaboration_mode: CollaborationMode,
    /// Tags.
    pub tags: Vec<String>,
    /// Recipes in display order.
    pub recipes: Vec<CollectionRecipeInput>,
    /// User ids of invited collaborators.
    pub collaborator_ids: Vec<String>,
}

/// Body of the update-collection call. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description; `Some(None)` serializes as `null` and clears it.
    #[serde(
        default,
        deserialize_with = "crate::types::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    /// New visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// New collaboration mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaboration_mode: Option<CollaborationMode>,
    /// Replacement tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Replacement recipe list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<CollectionRecipeInput>>,
    /// Replacement collaborator list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaborator_ids: Option<Vec<String>>,
}

fn recipe_inputs(recipes: &[RecipeRef]) -> Vec<CollectionRecipeInput> {
    recipes
        .iter()
        .map(|r| CollectionRecipeInput {
            recipe_id: r.recipe_id,
            display_order: r.display_order,
        })
        .collect()
}

fn collaborator_ids(collaborators: &[CollaboratorRef]) -> Vec<String> {
    collaborators.iter().map(|c| c.user_id.clone()).collect()
}

/// Builds the create payload from a validated form.
///
/// No fallbacks are needed: every required field is present on a
/// validated collection form.
pub fn to_create_request(form: &Validated<CollectionFormData>) -> CreateCollectionRequest {
    CreateCollectionRequest {
        name: form.name.clone(),
        description: form.description.clone(),
        visibility: form.visibility,
        collaboration_mode: form.collaboration_mode,
        tags: form.tags.clone(),
        recipes: recipe_inputs(&form.recipes),
        collaborator_ids: collaborator_ids(&form.collaborators),
    }
}

/// Builds the update payload from a patch. Only present fields are included.
pub fn to_update_request(patch: &CollectionFormPatch) -> UpdateCollectionRequest {
    UpdateCollectionRequest {
        name: patch.name.clone(),
        description: patch.description.clone(),
        visibility: patch.visibility,
        collaboration_mode: patch.collaboration_mode,
        tags: patch.tags.clone(),
        recipes: patch.recipes.as_deref().map(recipe_inputs),
        collaborator_ids: patch.collaborators.as_deref().map(collaborator_ids),
    }
}
