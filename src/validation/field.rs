//! Single-field validation.
//!
//! The UI validates one control at a time while the user types. A field is
//! addressed by its [`FieldKind`] and carries a [`FieldValue`]; pairing a
//! kind with the wrong value shape is a programming error and is reported as
//! [`FormError::SchemaViolation`] instead of a user-facing message.

use crate::collection::types::{CollaboratorRef, RecipeRef};
use crate::collection::validation::{
    check_collaborator_entry, check_recipe_entry, DESCRIPTION, NAME,
};
use crate::error::{FormError, Issue, Result};
use crate::recipe::types::{IngredientEntry, StepEntry};
use crate::recipe::validation::{check_ingredient_entry, check_step_entry};
use crate::validation::tags::TAG;

/// The atomic fields that can be checked on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Collection name.
    Name,
    /// Collection description (optional).
    Description,
    /// One tag.
    Tag,
    /// One recipe reference in a collection.
    RecipeEntry,
    /// One collaborator reference in a collection.
    CollaboratorEntry,
    /// One ingredient line of a recipe.
    IngredientEntry,
    /// One instruction step of a recipe.
    StepEntry,
}

impl FieldKind {
    fn path(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Tag => "tag",
            Self::RecipeEntry => "recipe",
            Self::CollaboratorEntry => "collaborator",
            Self::IngredientEntry => "ingredient",
            Self::StepEntry => "step",
        }
    }

    fn expected_shape(self) -> &'static str {
        match self {
            Self::Name | Self::Tag => "expected text",
            Self::Description => "expected text or absent",
            Self::RecipeEntry => "expected a recipe reference",
            Self::CollaboratorEntry => "expected a collaborator reference",
            Self::IngredientEntry => "expected an ingredient entry",
            Self::StepEntry => "expected an instruction step",
        }
    }
}

/// A raw or normalized field value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// A string control.
    Text(String),
    /// An optional control left empty.
    Absent,
    /// A recipe reference.
    Recipe(RecipeRef),
    /// A collaborator reference.
    Collaborator(CollaboratorRef),
    /// An ingredient line.
    Ingredient(IngredientEntry),
    /// An instruction step.
    Step(StepEntry),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Result of checking one field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldOutcome {
    /// The field passed; holds the normalized value.
    Valid(FieldValue),
    /// The field failed; holds the first broken rule's message.
    Invalid(String),
}

impl FieldOutcome {
    /// Returns true if the field passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(message) => Some(message),
        }
    }

    /// The normalized value, if the field passed.
    pub fn into_value(self) -> Option<FieldValue> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

fn outcome<T>(result: std::result::Result<T, String>, wrap: fn(T) -> FieldValue) -> FieldOutcome {
    match result {
        Ok(value) => FieldOutcome::Valid(wrap(value)),
        Err(message) => FieldOutcome::Invalid(message),
    }
}

fn entry_outcome<T>(result: std::result::Result<T, Issue>, wrap: fn(T) -> FieldValue) -> FieldOutcome {
    outcome(result.map_err(|issue| issue.message), wrap)
}

/// Checks a single field.
///
/// # Errors
///
/// Returns [`FormError::SchemaViolation`] if `value` does not have the shape
/// `kind` expects (e.g. a recipe reference passed as a tag).
///
/// # Example
///
/// ```rust
/// use recipeforms::validation::{validate_field, FieldKind, FieldOutcome, FieldValue};
///
/// let outcome = validate_field(FieldKind::Name, &"  My Collection  ".into()).unwrap();
/// assert_eq!(outcome, FieldOutcome::Valid(FieldValue::Text("My Collection".into())));
/// ```
pub fn validate_field(kind: FieldKind, value: &FieldValue) -> Result<FieldOutcome> {
    let checked = match (kind, value) {
        (FieldKind::Name, FieldValue::Text(s)) => outcome(NAME.check(s), FieldValue::Text),
        (FieldKind::Description, FieldValue::Text(s)) => {
            outcome(DESCRIPTION.check_optional(Some(s.as_str())), |d| {
                d.map_or(FieldValue::Absent, FieldValue::Text)
            })
        }
        (FieldKind::Description, FieldValue::Absent) => FieldOutcome::Valid(FieldValue::Absent),
        (FieldKind::Tag, FieldValue::Text(s)) => outcome(TAG.check(s), FieldValue::Text),
        (FieldKind::RecipeEntry, FieldValue::Recipe(r)) => {
            entry_outcome(check_recipe_entry(r), FieldValue::Recipe)
        }
        (FieldKind::CollaboratorEntry, FieldValue::Collaborator(c)) => {
            entry_outcome(check_collaborator_entry(c), FieldValue::Collaborator)
        }
        (FieldKind::IngredientEntry, FieldValue::Ingredient(i)) => {
            entry_outcome(check_ingredient_entry(i), FieldValue::Ingredient)
        }
        (FieldKind::StepEntry, FieldValue::Step(s)) => {
            entry_outcome(check_step_entry(s), FieldValue::Step)
        }
        (kind, _) => {
            return Err(FormError::schema_violation(
                kind.path(),
                kind.expected_shape(),
            ))
        }
    };
    Ok(checked)
}
