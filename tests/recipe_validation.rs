//! Integration tests for the create-recipe wizard.
//!
//! These tests verify the end-to-end behavior of:
//! - Ingredient and instruction sections
//! - Optional numeric fields during editing
//! - The servings fallback applied at submission
//! - Field-level validation of recipe entries

use recipeforms::limits::DEFAULT_SERVINGS;
use recipeforms::recipe::{
    to_create_recipe_request, to_update_recipe_request, IngredientEntry, RecipeFormData,
    RecipeFormPatch, RecipeStep, StepEntry,
};
use recipeforms::validation::{
    validate_field, validate_section, validate_steps_up_to, validate_whole_form, FieldKind,
    FieldOutcome, FieldValue,
};

fn pancakes() -> RecipeFormData {
    RecipeFormData::new()
        .with_title("  Pancakes  ")
        .with_ingredient(IngredientEntry::new("i1", "Flour").with_amount(1.5, "cup"))
        .with_ingredient(IngredientEntry::new("i2", "Milk").with_amount(250.0, "ml"))
        .with_step("s1", "Whisk the batter")
        .with_step("s2", "Cook on a hot griddle")
}

#[test]
fn test_valid_recipe_submits_with_default_servings() {
    let validated = validate_whole_form(&pancakes()).unwrap();
    assert_eq!(validated.title, "Pancakes");

    let request = to_create_recipe_request(&validated);
    assert_eq!(request.servings, DEFAULT_SERVINGS);
    assert_eq!(request.ingredients[0].quantity, Some(1.5));
    assert_eq!(request.steps.len(), 2);
}

#[test]
fn test_missing_ingredients_and_steps() {
    let form = RecipeFormData::new().with_title("Empty");

    let ingredients = validate_section(RecipeStep::Ingredients, &form).unwrap_err();
    assert_eq!(
        ingredients.messages(),
        vec!["Recipe must have at least 1 ingredient"]
    );

    let steps = validate_section(RecipeStep::Instructions, &form).unwrap_err();
    assert_eq!(steps.messages(), vec!["Recipe must have at least 1 step"]);
}

#[test]
fn test_ingredient_errors_are_addressed_by_index() {
    let mut form = pancakes();
    form.ingredients[1].name = " ".into();

    let errors = validate_section(RecipeStep::Ingredients, &form).unwrap_err();
    let issue = errors.first().unwrap();
    assert_eq!(issue.path, "ingredients.1.name");
    assert_eq!(issue.message, "Ingredient name is required");
}

#[test]
fn test_ingredient_limit() {
    let mut form = pancakes();
    form.ingredients = (0..51)
        .map(|i| IngredientEntry::new(format!("i{}", i), format!("Item {}", i)))
        .collect();

    let errors = validate_section(RecipeStep::Ingredients, &form).unwrap_err();
    assert_eq!(errors.messages(), vec!["Maximum 50 ingredients allowed"]);
}

#[test]
fn test_quantity_upper_bound() {
    let mut form = pancakes();
    form.ingredients[0].quantity = Some(10_000.5);

    let errors = validate_section(RecipeStep::Ingredients, &form).unwrap_err();
    assert_eq!(errors.messages(), vec!["Quantity must be at most 10000"]);
}

#[test]
fn test_step_numbering_and_gating() {
    let mut form = pancakes();
    form.steps.swap(0, 1);

    let failure = validate_steps_up_to(RecipeStep::Review, &form).unwrap_err();
    assert_eq!(failure.step, RecipeStep::Instructions);
    assert_eq!(
        failure.errors.for_field("steps"),
        vec!["Step numbers must be sequential starting at 1"]
    );
}

#[test]
fn test_title_failure_gates_later_sections() {
    let mut form = pancakes().with_title("Hi");
    form.steps.clear();

    let failure = validate_steps_up_to(RecipeStep::Instructions, &form).unwrap_err();
    assert_eq!(failure.step, RecipeStep::BasicInfo);
}

#[test]
fn test_field_level_step_entry() {
    let entry = StepEntry::new("s", 1, "  Rest  ").with_duration(600);
    match validate_field(FieldKind::StepEntry, &FieldValue::Step(entry)).unwrap() {
        FieldOutcome::Valid(FieldValue::Step(step)) => {
            assert_eq!(step.instruction, "Rest");
            assert_eq!(step.duration, Some(600));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_field_level_wrong_shape() {
    let err = validate_field(FieldKind::IngredientEntry, &"Flour".into()).unwrap_err();
    assert!(err.is_schema_violation());
}

#[test]
fn test_update_request_renames_fields() {
    let patch = RecipeFormPatch {
        prep_time: Some(Some(10)),
        steps: Some(vec![StepEntry::new("s1", 1, "Mix").with_duration(30)]),
        ..Default::default()
    };

    let json = serde_json::to_value(to_update_recipe_request(&patch)).unwrap();
    assert_eq!(json["preparationTime"], 10);
    assert_eq!(json["steps"][0]["timerSeconds"], 30);
    assert!(json.get("title").is_none());
}

// ============================================================================
// Upper Bound Tests
// ============================================================================

#[test]
fn test_title_upper_bound() {
    let at_max = pancakes().with_title("t".repeat(200));
    assert!(validate_section(RecipeStep::BasicInfo, &at_max).is_ok());

    let over = pancakes().with_title("t".repeat(201));
    let errors = validate_section(RecipeStep::BasicInfo, &over).unwrap_err();
    assert_eq!(
        errors.for_field("title"),
        vec!["Recipe title must be at most 200 characters"]
    );
}

#[test]
fn test_description_upper_bound() {
    let mut form = pancakes();
    form.description = Some("d".repeat(2000));
    assert!(validate_section(RecipeStep::BasicInfo, &form).is_ok());

    form.description = Some("d".repeat(2001));
    let errors = validate_section(RecipeStep::BasicInfo, &form).unwrap_err();
    assert_eq!(
        errors.for_field("description"),
        vec!["Description must be at most 2000 characters"]
    );
}

#[test]
fn test_unit_upper_bound() {
    let mut form = pancakes();
    form.ingredients[0].unit = Some("u".repeat(20));
    assert!(validate_section(RecipeStep::Ingredients, &form).is_ok());

    form.ingredients[0].unit = Some("u".repeat(21));
    let errors = validate_section(RecipeStep::Ingredients, &form).unwrap_err();
    let issue = errors.first().unwrap();
    assert_eq!(issue.path, "ingredients.0.unit");
    assert_eq!(issue.message, "Unit must be at most 20 characters");
}

#[test]
fn test_step_count_upper_bound() {
    let steps = |count: u32| -> Vec<StepEntry> {
        (1..=count)
            .map(|n| StepEntry::new(format!("s{}", n), n, "Stir"))
            .collect()
    };

    let mut form = pancakes();
    form.steps = steps(50);
    assert!(validate_section(RecipeStep::Instructions, &form).is_ok());

    form.steps = steps(51);
    let errors = validate_section(RecipeStep::Instructions, &form).unwrap_err();
    assert_eq!(errors.messages(), vec!["Maximum 50 steps allowed"]);
}

#[test]
fn test_instruction_upper_bound() {
    let mut form = pancakes();
    form.steps[0].instruction = "i".repeat(2000);
    assert!(validate_section(RecipeStep::Instructions, &form).is_ok());

    form.steps[0].instruction = "i".repeat(2001);
    let errors = validate_section(RecipeStep::Instructions, &form).unwrap_err();
    let issue = errors.first().unwrap();
    assert_eq!(issue.path, "steps.0.instruction");
    assert_eq!(issue.message, "Step instruction must be at most 2000 characters");
}
