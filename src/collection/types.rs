//! Type definitions for the create-collection wizard.
//!
//! Field names serialize in camelCase so a persisted draft matches the
//! shape the UI reads and writes.

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::validation::WizardStep;

// ============================================================================
// Enums
// ============================================================================

/// Who can see a collection or recipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Anyone.
    #[default]
    Public,
    /// Only the owner and collaborators.
    Private,
    /// The owner's friends.
    FriendsOnly,
}

/// Who may edit a shared collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollaborationMode {
    /// Only the owner.
    #[default]
    OwnerOnly,
    /// Any signed-in user.
    AllUsers,
    /// The users listed in `collaborators`.
    SpecificUsers,
}

/// Steps of the create-collection wizard, in order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionStep {
    /// Name, description, visibility, collaboration mode, tags.
    BasicInfo,
    /// Recipe selection and ordering.
    Recipes,
    /// Collaborator selection.
    Collaborators,
    /// Read-only summary.
    Review,
}

impl WizardStep for CollectionStep {
    const ORDER: &'static [Self] = &[
        Self::BasicInfo,
        Self::Recipes,
        Self::Collaborators,
        Self::Review,
    ];
}

// ============================================================================
// References
// ============================================================================

/// A recipe selected into a collection draft.
///
/// `id` is a client-local key; identity for deduplication is `recipe_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRef {
    /// Draft-local key.
    pub id: String,
    /// Server id of the recipe (must be > 0).
    pub recipe_id: i64,
    /// Title shown in the wizard.
    pub recipe_title: String,
    /// Optional description shown in the wizard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_description: Option<String>,
    /// Position in the collection, kept equal to the list index.
    pub display_order: u32,
}

impl RecipeRef {
    /// Creates a reference with `display_order` 0; the store assigns the real slot.
    pub fn new(id: impl Into<String>, recipe_id: i64, recipe_title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            recipe_id,
            recipe_title: recipe_title.into(),
            recipe_description: None,
            display_order: 0,
        }
    }

    /// Builder: Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.recipe_description = Some(description.into());
        self
    }

    /// Builder: Set display order.
    pub fn with_display_order(mut self, display_order: u32) -> Self {
        self.display_order = display_order;
        self
    }
}

/// A user invited to edit a collection.
///
/// Identity for deduplication is `user_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorRef {
    /// Draft-local key.
    pub id: String,
    /// Server id of the user.
    pub user_id: String,
    /// Username.
    pub username: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl CollaboratorRef {
    /// Creates a collaborator reference.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            username: username.into(),
            display_name: None,
        }
    }

    /// Builder: Set display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

// ============================================================================
// Form data
// ============================================================================

/// A collection form in progress.
///
/// `Default` is the canonical empty draft the wizard starts from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionFormData {
    /// Collection name (3–100 chars once trimmed).
    pub name: String,
    /// Optional description (max 500 chars).
    #[serde(default)]
    pub description: Option<String>,
    /// Who can see the collection.
    #[serde(default)]
    pub visibility: Visibility,
    /// Who may edit the collection.
    #[serde(default)]
    pub collaboration_mode: CollaborationMode,
    /// Tags, unique case-insensitively.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Selected recipes in display order.
    #[serde(default)]
    pub recipes: Vec<RecipeRef>,
    /// Invited collaborators.
    #[serde(default)]
    pub collaborators: Vec<CollaboratorRef>,
}

impl CollectionFormData {
    /// Creates the canonical empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Set name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: Set visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Builder: Set collaboration mode.
    pub fn with_collaboration_mode(mut self, mode: CollaborationMode) -> Self {
        self.collaboration_mode = mode;
        self
    }

    /// Builder: Set tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: Append a recipe at the next display slot.
    pub fn with_recipe(mut self, recipe: RecipeRef) -> Self {
        let display_order = self.recipes.len() as u32;
        self.recipes.push(recipe.with_display_order(display_order));
        self
    }

    /// Builder: Append a collaborator.
    pub fn with_collaborator(mut self, collaborator: CollaboratorRef) -> Self {
        self.collaborators.push(collaborator);
        self
    }

    /// Returns true if any field a user would care about losing is filled in.
    pub fn has_content(&self) -> bool {
        !self.name.trim().is_empty()
            || !self.tags.is_empty()
            || !self.recipes.is_empty()
            || !self.collaborators.is_empty()
    }
}

/// A shallow, partial update to a [`CollectionFormData`].
///
/// Only fields that are `Some(...)` are applied. `description` is doubly
/// optional so a patch can clear it (`Some(None)`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionFormPatch {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description, or `Some(None)` to clear it.
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
    /// Replacement tag list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Replacement recipe list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<RecipeRef>>,
    /// Replacement collaborator list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<Vec<CollaboratorRef>>,
}

impl CollectionFormPatch {
    /// Returns true if the patch sets no field.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the present fields into `form`.
    pub fn apply_to(self, form: &mut CollectionFormData) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(visibility) = self.visibility {
            form.visibility = visibility;
        }
        if let Some(mode) = self.collaboration_mode {
            form.collaboration_mode = mode;
        }
        if let Some(tags) = self.tags {
            form.tags = tags;
        }
        if let Some(recipes) = self.recipes {
            form.recipes = recipes;
        }
        if let Some(collaborators) = self.collaborators {
            form.collaborators = collaborators;
        }
    }
}
