//! Type definitions for the create-recipe wizard.
//!
//! Numeric fields are `Option` while the user is editing: `None` means
//! "not entered yet", which is different from any value the request
//! conversion may later fall back to.

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::collection::Visibility;
use crate::validation::WizardStep;

/// Steps of the create-recipe wizard, in order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipeStep {
    /// Title, description, servings, timings, visibility, tags.
    BasicInfo,
    /// Ingredient list.
    Ingredients,
    /// Instruction steps.
    Instructions,
    /// Read-only summary.
    Review,
}

impl WizardStep for RecipeStep {
    const ORDER: &'static [Self] = &[
        Self::BasicInfo,
        Self::Ingredients,
        Self::Instructions,
        Self::Review,
    ];
}

/// One ingredient line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientEntry {
    /// Draft-local key.
    pub id: String,
    /// Ingredient name.
    pub name: String,
    /// Amount, if measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of `quantity` (e.g. "g", "cup").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl IngredientEntry {
    /// Creates an unmeasured ingredient.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity: None,
            unit: None,
        }
    }

    /// Builder: Set quantity and unit.
    pub fn with_amount(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.quantity = Some(quantity);
        self.unit = Some(unit.into());
        self
    }
}

/// One instruction step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepEntry {
    /// Draft-local key.
    pub id: String,
    /// 1-based position, kept equal to index + 1.
    pub step_number: u32,
    /// What to do.
    pub instruction: String,
    /// Optional timer, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl StepEntry {
    /// Creates a step.
    pub fn new(id: impl Into<String>, step_number: u32, instruction: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            step_number,
            instruction: instruction.into(),
            duration: None,
        }
    }

    /// Builder: Set timer in seconds.
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }
}

/// A recipe form in progress.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFormData {
    /// Recipe title (3–200 chars once trimmed).
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of servings; falls back at submission if absent.
    #[serde(default)]
    pub servings: Option<u32>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: Option<u32>,
    /// Cooking time in minutes.
    #[serde(default)]
    pub cook_time: Option<u32>,
    /// Who can see the recipe.
    #[serde(default)]
    pub visibility: Visibility,
    /// Tags, unique case-insensitively.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ingredient lines.
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
    /// Instruction steps, in order.
    #[serde(default)]
    pub steps: Vec<StepEntry>,
}

impl RecipeFormData {
    /// Creates an empty recipe form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Set title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: Set servings.
    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Builder: Set preparation and cooking time, in minutes.
    pub fn with_times(mut self, prep_time: u32, cook_time: u32) -> Self {
        self.prep_time = Some(prep_time);
        self.cook_time = Some(cook_time);
        self
    }

    /// Builder: Append an ingredient.
    pub fn with_ingredient(mut self, ingredient: IngredientEntry) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Builder: Append a step, numbering it after the existing ones.
    pub fn with_step(mut self, id: impl Into<String>, instruction: impl Into<String>) -> Self {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(StepEntry::new(id, step_number, instruction));
        self
    }
}

/// A shallow, partial update to a [`RecipeFormData`].
///
/// Optional scalars are doubly optional so a patch can clear them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFormPatch {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description, or `Some(None)` to clear.
    #[serde(
        default,
        deserialize_with = "crate::types::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    /// New servings, or `Some(None)` to clear.
    #[serde(
        default,
        deserialize_with = "crate::types::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub servings: Option<Option<u32>>,
    /// New preparation time, or `Some(None)` to clear.
    #[serde(
        default,
        deserialize_with = "crate::types::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub prep_time: Option<Option<u32>>,
    /// New cooking time, or `Some(None)` to clear.
    #[serde(
        default,
        deserialize_with = "crate::types::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub cook_time: Option<Option<u32>>,
    /// New visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Replacement tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Replacement ingredients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<IngredientEntry>>,
    /// Replacement steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepEntry>>,
}

impl RecipeFormPatch {
    /// Merges the present fields into `form`.
    pub fn apply_to(self, form: &mut RecipeFormData) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(servings) = self.servings {
            form.servings = servings;
        }
        if let Some(prep_time) = self.prep_time {
            form.prep_time = prep_time;
        }
        if let Some(cook_time) = self.cook_time {
            form.cook_time = cook_time;
        }
        if let Some(visibility) = self.visibility {
            form.visibility = visibility;
        }
        if let Some(tags) = self.tags {
            form.tags = tags;
        }
        if let Some(ingredients) = self.ingredients {
            form.ingredients = ingredients;
        }
        if let Some(steps) = self.steps {
            form.steps = steps;
        }
    }
}
