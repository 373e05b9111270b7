//! Schemas for the create-recipe wizard.
//!
//! # Rules
//!
//! | Section | Field | Constraint |
//! |---------|-------|------------|
//! | BASIC_INFO | `title` | trimmed, 3–200 chars |
//! | BASIC_INFO | `description` | optional, max 2000 chars |
//! | BASIC_INFO | `servings` | optional, 1–100 |
//! | BASIC_INFO | `prepTime`, `cookTime` | optional, 0–1440 minutes |
//! | BASIC_INFO | `tags` | same rules as collection tags |
//! | INGREDIENTS | `ingredients` | 1–50 entries; name 1–100, quantity in (0, 10000], unit max 20 |
//! | INSTRUCTIONS | `steps` | 1–50 entries; instruction 1–2000, `stepNumber == index + 1`, timer max 24 h |

use std::sync::LazyLock;

use super::types::{IngredientEntry, RecipeFormData, RecipeFormPatch, RecipeStep, StepEntry};
use crate::error::{Issue, ValidationErrors};
use crate::limits::{
    MAX_INGREDIENTS, MAX_INGREDIENT_NAME_LENGTH, MAX_INGREDIENT_QUANTITY, MAX_INSTRUCTION_LENGTH,
    MAX_RECIPE_DESCRIPTION_LENGTH, MAX_RECIPE_TITLE_LENGTH, MAX_SERVINGS,
    MAX_STEP_DURATION_SECONDS, MAX_STEPS, MAX_TIME_MINUTES, MAX_UNIT_LENGTH, MIN_INGREDIENTS,
    MIN_RECIPE_TITLE_LENGTH, MIN_SERVINGS, MIN_STEPS,
};
use crate::validation::rules::{Issues, ListRule, NumberRule, TextRule};
use crate::validation::tags::check_tags;
use crate::validation::{SectionSchema, WizardForm};

// ============================================================================
// Field schemas
// ============================================================================

pub(crate) static TITLE: LazyLock<TextRule> = LazyLock::new(|| {
    TextRule::new()
        .trim()
        .min(
            MIN_RECIPE_TITLE_LENGTH,
            format!(
                "Recipe title must be at least {} characters",
                MIN_RECIPE_TITLE_LENGTH
            ),
        )
        .max(
            MAX_RECIPE_TITLE_LENGTH,
            format!(
                "Recipe title must be at most {} characters",
                MAX_RECIPE_TITLE_LENGTH
            ),
        )
});

static DESCRIPTION: LazyLock<TextRule> = LazyLock::new(|| {
    TextRule::new().trim().max(
        MAX_RECIPE_DESCRIPTION_LENGTH,
        format!(
            "Description must be at most {} characters",
            MAX_RECIPE_DESCRIPTION_LENGTH
        ),
    )
});

static SERVINGS: LazyLock<NumberRule<u32>> = LazyLock::new(|| {
    NumberRule::new()
        .min(
            MIN_SERVINGS,
            format!("Servings must be at least {}", MIN_SERVINGS),
        )
        .max(
            MAX_SERVINGS,
            format!("Servings must be at most {}", MAX_SERVINGS),
        )
});

static PREP_TIME: LazyLock<NumberRule<u32>> = LazyLock::new(|| {
    NumberRule::new().max(
        MAX_TIME_MINUTES,
        format!(
            "Preparation time cannot exceed {} minutes",
            MAX_TIME_MINUTES
        ),
    )
});

static COOK_TIME: LazyLock<NumberRule<u32>> = LazyLock::new(|| {
    NumberRule::new().max(
        MAX_TIME_MINUTES,
        format!("Cooking time cannot exceed {} minutes", MAX_TIME_MINUTES),
    )
});

static INGREDIENT_NAME: LazyLock<TextRule> = LazyLock::new(|| {
    TextRule::new()
        .trim()
        .min(1, "Ingredient name is required")
        .max(
            MAX_INGREDIENT_NAME_LENGTH,
            format!(
                "Ingredient name must be at most {} characters",
                MAX_INGREDIENT_NAME_LENGTH
            ),
        )
});

static QUANTITY: LazyLock<NumberRule<f64>> = LazyLock::new(|| {
    NumberRule::new()
        .greater_than(0.0, "Quantity must be greater than 0")
        .max(
            MAX_INGREDIENT_QUANTITY,
            format!("Quantity must be at most {}", MAX_INGREDIENT_QUANTITY),
        )
});

static UNIT: LazyLock<TextRule> = LazyLock::new(|| {
    TextRule::new().trim().max(
        MAX_UNIT_LENGTH,
        format!("Unit must be at most {} characters", MAX_UNIT_LENGTH),
    )
});

static INGREDIENTS: LazyLock<ListRule<IngredientEntry>> = LazyLock::new(|| {
    ListRule::<IngredientEntry>::new()
        .min(
            MIN_INGREDIENTS,
            format!(
                "Recipe must have at least {} ingredient",
                MIN_INGREDIENTS
            ),
        )
        .max(
            MAX_INGREDIENTS,
            format!("Maximum {} ingredients allowed", MAX_INGREDIENTS),
        )
});

static INSTRUCTION: LazyLock<TextRule> = LazyLock::new(|| {
    TextRule::new()
        .trim()
        .min(1, "Step instruction is required")
        .max(
            MAX_INSTRUCTION_LENGTH,
            format!(
                "Step instruction must be at most {} characters",
                MAX_INSTRUCTION_LENGTH
            ),
        )
});

static DURATION: LazyLock<NumberRule<u32>> = LazyLock::new(|| {
    NumberRule::new().max(MAX_STEP_DURATION_SECONDS, "Step timer cannot exceed 24 hours")
});

static STEPS: LazyLock<ListRule<StepEntry>> = LazyLock::new(|| {
    ListRule::<StepEntry>::new()
        .min(
            MIN_STEPS,
            format!("Recipe must have at least {} step", MIN_STEPS),
        )
        .max(MAX_STEPS, format!("Maximum {} steps allowed", MAX_STEPS))
        .positioned(
            |s, i| s.step_number as usize == i + 1,
            "Step numbers must be sequential starting at 1",
        )
});

// ============================================================================
// Entry schemas
// ============================================================================

/// Checks one ingredient line. The issue path is relative to the entry.
pub(crate) fn check_ingredient_entry(entry: &IngredientEntry) -> Result<IngredientEntry, Issue> {
    let name = INGREDIENT_NAME
        .check(&entry.name)
        .map_err(|m| Issue::new("name", m))?;
    let quantity = QUANTITY
        .check_optional(entry.quantity)
        .map_err(|m| Issue::new("quantity", m))?;
    let unit = UNIT
        .check_optional(entry.unit.as_deref())
        .map_err(|m| Issue::new("unit", m))?;

    Ok(IngredientEntry {
        id: entry.id.clone(),
        name,
        quantity,
        unit,
    })
}

/// Checks one instruction step. The issue path is relative to the entry.
pub(crate) fn check_step_entry(entry: &StepEntry) -> Result<StepEntry, Issue> {
    let instruction = INSTRUCTION
        .check(&entry.instruction)
        .map_err(|m| Issue::new("instruction", m))?;
    let duration = DURATION
        .check_optional(entry.duration)
        .map_err(|m| Issue::new("duration", m))?;

    Ok(StepEntry {
        id: entry.id.clone(),
        step_number: entry.step_number,
        instruction,
        duration,
    })
}

fn check_ingredients(ingredients: &mut [IngredientEntry], issues: &mut Issues) {
    for (i, entry) in ingredients.iter_mut().enumerate() {
        match check_ingredient_entry(entry) {
            Ok(normalized) => *entry = normalized,
            Err(issue) => issues.nested(&format!("ingredients.{}", i), issue),
        }
    }
    issues.field("ingredients", INGREDIENTS.check(ingredients));
}

fn check_steps(steps: &mut [StepEntry], issues: &mut Issues) {
    for (i, entry) in steps.iter_mut().enumerate() {
        match check_step_entry(entry) {
            Ok(normalized) => *entry = normalized,
            Err(issue) => issues.nested(&format!("steps.{}", i), issue),
        }
    }
    issues.field("steps", STEPS.check(steps));
}

// ============================================================================
// Section schemas
// ============================================================================

fn basic_info(form: &mut RecipeFormData, issues: &mut Issues) {
    if let Some(title) = issues.field("title", TITLE.check(&form.title)) {
        form.title = title;
    }
    if let Some(description) = issues.field(
        "description",
        DESCRIPTION.check_optional(form.description.as_deref()),
    ) {
        form.description = description;
    }
    issues.field("servings", SERVINGS.check_optional(form.servings));
    issues.field("prepTime", PREP_TIME.check_optional(form.prep_time));
    issues.field("cookTime", COOK_TIME.check_optional(form.cook_time));
    check_tags(&mut form.tags, issues);
}

fn ingredients(form: &mut RecipeFormData, issues: &mut Issues) {
    check_ingredients(&mut form.ingredients, issues);
}

fn instructions(form: &mut RecipeFormData, issues: &mut Issues) {
    check_steps(&mut form.steps, issues);
}

impl WizardForm for RecipeFormData {
    type Step = RecipeStep;

    fn section_schema(step: RecipeStep) -> Option<SectionSchema<Self>> {
        match step {
            RecipeStep::BasicInfo => Some(basic_info),
            RecipeStep::Ingredients => Some(ingredients),
            RecipeStep::Instructions => Some(instructions),
            RecipeStep::Review => None,
        }
    }
}

// ============================================================================
// Partial (update) validation
// ============================================================================

/// Validates a [`RecipeFormPatch`]; only `Some(...)` fields are checked.
///
/// Returns the normalized patch.
pub fn validate_recipe_patch(patch: &RecipeFormPatch) -> Result<RecipeFormPatch, ValidationErrors> {
    let mut normalized = patch.clone();
    let mut issues = Issues::new();

    if let Some(title) = &patch.title {
        normalized.title = issues.field("title", TITLE.check(title));
    }
    if let Some(description) = &patch.description {
        if let Some(d) =
            issues.field("description", DESCRIPTION.check_optional(description.as_deref()))
        {
            normalized.description = Some(d);
        }
    }
    if let Some(servings) = patch.servings {
        issues.field("servings", SERVINGS.check_optional(servings));
    }
    if let Some(prep_time) = patch.prep_time {
        issues.field("prepTime", PREP_TIME.check_optional(prep_time));
    }
    if let Some(cook_time) = patch.cook_time {
        issues.field("cookTime", COOK_TIME.check_optional(cook_time));
    }
    if let Some(tags) = normalized.tags.as_mut() {
        check_tags(tags, &mut issues);
    }
    if let Some(ingredients) = normalized.ingredients.as_mut() {
        check_ingredients(ingredients, &mut issues);
    }
    if let Some(steps) = normalized.steps.as_mut() {
        check_steps(steps, &mut issues);
    }

    issues.finish_with(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_section, validate_steps_up_to, validate_whole_form};

    fn valid_form() -> RecipeFormData {
        RecipeFormData::new()
            .with_title("Pancakes")
            .with_servings(4)
            .with_times(10, 15)
            .with_ingredient(IngredientEntry::new("i1", "Flour").with_amount(200.0, "g"))
            .with_ingredient(IngredientEntry::new("i2", "Salt"))
            .with_step("s1", "Whisk everything")
            .with_step("s2", "Fry in batches")
    }

    #[test]
    fn test_valid_recipe_passes() {
        assert!(validate_whole_form(&valid_form()).is_ok());
    }

    #[test]
    fn test_servings_optional_during_editing() {
        let mut form = valid_form();
        form.servings = None;
        assert!(validate_section(RecipeStep::BasicInfo, &form).is_ok());
    }

    #[test]
    fn test_servings_zero_rejected() {
        let form = valid_form().with_servings(0);
        let errors = validate_section(RecipeStep::BasicInfo, &form).unwrap_err();
        assert_eq!(errors.for_field("servings"), vec!["Servings must be at least 1"]);
    }

    #[test]
    fn test_time_bounds() {
        let form = valid_form().with_times(MAX_TIME_MINUTES + 1, MAX_TIME_MINUTES);
        let errors = validate_section(RecipeStep::BasicInfo, &form).unwrap_err();
        assert_eq!(
            errors.messages(),
            vec!["Preparation time cannot exceed 1440 minutes"]
        );
    }

    #[test]
    fn test_ingredient_quantity_must_be_positive() {
        let entry = IngredientEntry::new("i1", "Milk").with_amount(0.0, "ml");
        let issue = check_ingredient_entry(&entry).unwrap_err();
        assert_eq!(issue.path, "quantity");
        assert_eq!(issue.message, "Quantity must be greater than 0");
    }

    #[test]
    fn test_ingredient_unit_blank_normalizes_to_none() {
        let mut entry = IngredientEntry::new("i1", " Eggs ");
        entry.unit = Some("  ".into());
        let normalized = check_ingredient_entry(&entry).unwrap();
        assert_eq!(normalized.name, "Eggs");
        assert_eq!(normalized.unit, None);
    }

    #[test]
    fn test_empty_ingredients_rejected() {
        let mut form = valid_form();
        form.ingredients.clear();
        let errors = validate_section(RecipeStep::Ingredients, &form).unwrap_err();
        assert_eq!(
            errors.messages(),
            vec!["Recipe must have at least 1 ingredient"]
        );
    }

    #[test]
    fn test_step_numbers_must_be_sequential() {
        let mut form = valid_form();
        form.steps[1].step_number = 3;
        let errors = validate_section(RecipeStep::Instructions, &form).unwrap_err();
        assert_eq!(
            errors.messages(),
            vec!["Step numbers must be sequential starting at 1"]
        );
    }

    #[test]
    fn test_step_timer_bound() {
        let entry = StepEntry::new("s1", 1, "Rest the dough").with_duration(MAX_STEP_DURATION_SECONDS + 1);
        assert_eq!(
            check_step_entry(&entry).unwrap_err().message,
            "Step timer cannot exceed 24 hours"
        );
    }

    #[test]
    fn test_steps_up_to_reports_earliest_failure() {
        let mut form = valid_form().with_title("x");
        form.ingredients.clear();

        let failure = validate_steps_up_to(RecipeStep::Instructions, &form).unwrap_err();
        assert_eq!(failure.step, RecipeStep::BasicInfo);
    }

    #[test]
    fn test_patch_validates_present_fields() {
        let patch = RecipeFormPatch {
            servings: Some(Some(500)),
            ..Default::default()
        };
        let errors = validate_recipe_patch(&patch).unwrap_err();
        assert_eq!(errors.messages(), vec!["Servings must be at most 100"]);

        let clear = RecipeFormPatch {
            servings: Some(None),
            ..Default::default()
        };
        assert!(validate_recipe_patch(&clear).is_ok());
    }
}
