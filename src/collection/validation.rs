//! Schemas for the create-collection wizard.
//!
//! # Rules
//!
//! | Section | Field | Constraint |
//! |---------|-------|------------|
//! | BASIC_INFO | `name` | trimmed, 3–100 chars |
//! | BASIC_INFO | `description` | optional, trimmed, max 500 chars |
//! | BASIC_INFO | `tags` | max 10, each 1–30 chars of `[A-Za-z0-9 -]`, unique ignoring case |
//! | RECIPES | `recipes` | 1–100 entries, unique `recipeId`, `displayOrder == index` |
//! | COLLABORATORS | `collaborators` | max 20 entries, unique `userId` |
//! | whole form | `collaborators` | non-empty when mode is `SPECIFIC_USERS` |
//!
//! The collaborator requirement is deliberately absent from the
//! COLLABORATORS section: the step can be completed with nobody selected
//! and the rule is reported on final review.

use std::sync::LazyLock;

use super::types::{
    CollaborationMode, CollaboratorRef, CollectionFormData, CollectionFormPatch, CollectionStep,
    RecipeRef,
};
use crate::error::{Issue, ValidationErrors};
use crate::limits::{
    MAX_COLLABORATORS, MAX_COLLECTION_DESCRIPTION_LENGTH, MAX_COLLECTION_NAME_LENGTH,
    MAX_COLLECTION_RECIPES, MIN_COLLECTION_NAME_LENGTH, MIN_COLLECTION_RECIPES,
};
use crate::validation::rules::{Issues, ListRule, NumberRule, TextRule};
use crate::validation::tags::check_tags;
use crate::validation::{SectionSchema, WizardForm};

/// Message for the cross-field collaborator rule.
pub const COLLABORATORS_REQUIRED_MESSAGE: &str =
    "Add at least one collaborator when collaboration is limited to specific users";

// ============================================================================
// Field schemas
// ============================================================================

pub(crate) static NAME: LazyLock<TextRule> = LazyLock::new(|| {
    TextRule::new()
        .trim()
        .min(
            MIN_COLLECTION_NAME_LENGTH,
            format!(
                "Collection name must be at least {} characters",
                MIN_COLLECTION_NAME_LENGTH
            ),
        )
        .max(
            MAX_COLLECTION_NAME_LENGTH,
            format!(
                "Collection name must be at most {} characters",
                MAX_COLLECTION_NAME_LENGTH
            ),
        )
});

pub(crate) static DESCRIPTION: LazyLock<TextRule> = LazyLock::new(|| {
    TextRule::new().trim().max(
        MAX_COLLECTION_DESCRIPTION_LENGTH,
        format!(
            "Description must be at most {} characters",
            MAX_COLLECTION_DESCRIPTION_LENGTH
        ),
    )
});

static RECIPE_KEY: LazyLock<TextRule> =
    LazyLock::new(|| TextRule::new().trim().min(1, "Recipe key is required"));

static RECIPE_ID: LazyLock<NumberRule<i64>> =
    LazyLock::new(|| NumberRule::new().greater_than(0, "Invalid recipe ID"));

static RECIPE_TITLE: LazyLock<TextRule> =
    LazyLock::new(|| TextRule::new().trim().min(1, "Recipe title is required"));

static RECIPES: LazyLock<ListRule<RecipeRef>> = LazyLock::new(|| {
    ListRule::<RecipeRef>::new()
        .min(
            MIN_COLLECTION_RECIPES,
            format!(
                "Collection must contain at least {} recipe",
                MIN_COLLECTION_RECIPES
            ),
        )
        .max(
            MAX_COLLECTION_RECIPES,
            format!(
                "Collection cannot contain more than {} recipes",
                MAX_COLLECTION_RECIPES
            ),
        )
        .unique_by(
            |r| r.recipe_id.to_string(),
            "Duplicate recipe: each recipe can only be added once",
        )
        .positioned(
            |r, i| r.display_order as usize == i,
            "Recipe display order must be contiguous starting at 0",
        )
});

static COLLABORATOR_KEY: LazyLock<TextRule> =
    LazyLock::new(|| TextRule::new().trim().min(1, "Collaborator key is required"));

static COLLABORATOR_USER_ID: LazyLock<TextRule> =
    LazyLock::new(|| TextRule::new().trim().min(1, "Collaborator user ID is required"));

static COLLABORATOR_USERNAME: LazyLock<TextRule> =
    LazyLock::new(|| TextRule::new().trim().min(1, "Collaborator username is required"));

static COLLABORATORS: LazyLock<ListRule<CollaboratorRef>> = LazyLock::new(|| {
    ListRule::<CollaboratorRef>::new()
        .max(
            MAX_COLLABORATORS,
            format!("Maximum {} collaborators allowed", MAX_COLLABORATORS),
        )
        .unique_by(|c| c.user_id.clone(), "Collaborators must be unique")
});

// ============================================================================
// Entry schemas
// ============================================================================

/// Checks one recipe entry. The issue path is relative to the entry.
pub(crate) fn check_recipe_entry(entry: &RecipeRef) -> Result<RecipeRef, Issue> {
    let id = RECIPE_KEY.check(&entry.id).map_err(|m| Issue::new("id", m))?;
    let recipe_id = RECIPE_ID
        .check(entry.recipe_id)
        .map_err(|m| Issue::new("recipeId", m))?;
    let recipe_title = RECIPE_TITLE
        .check(&entry.recipe_title)
        .map_err(|m| Issue::new("recipeTitle", m))?;

    Ok(RecipeRef {
        id,
        recipe_id,
        recipe_title,
        recipe_description: entry
            .recipe_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
        display_order: entry.display_order,
    })
}

/// Checks one collaborator entry. The issue path is relative to the entry.
pub(crate) fn check_collaborator_entry(entry: &CollaboratorRef) -> Result<CollaboratorRef, Issue> {
    let id = COLLABORATOR_KEY
        .check(&entry.id)
        .map_err(|m| Issue::new("id", m))?;
    let user_id = COLLABORATOR_USER_ID
        .check(&entry.user_id)
        .map_err(|m| Issue::new("userId", m))?;
    let username = COLLABORATOR_USERNAME
        .check(&entry.username)
        .map_err(|m| Issue::new("username", m))?;

    Ok(CollaboratorRef {
        id,
        user_id,
        username,
        display_name: entry.display_name.clone(),
    })
}

fn check_recipes(recipes: &mut [RecipeRef], issues: &mut Issues) {
    for (i, entry) in recipes.iter_mut().enumerate() {
        match check_recipe_entry(entry) {
            Ok(normalized) => *entry = normalized,
            Err(issue) => issues.nested(&format!("recipes.{}", i), issue),
        }
    }
    issues.field("recipes", RECIPES.check(recipes));
}

fn check_collaborators(collaborators: &mut [CollaboratorRef], issues: &mut Issues) {
    for (i, entry) in collaborators.iter_mut().enumerate() {
        match check_collaborator_entry(entry) {
            Ok(normalized) => *entry = normalized,
            Err(issue) => issues.nested(&format!("collaborators.{}", i), issue),
        }
    }
    issues.field("collaborators", COLLABORATORS.check(collaborators));
}

fn specific_users_without_collaborators(
    mode: CollaborationMode,
    collaborators: &[CollaboratorRef],
) -> bool {
    mode == CollaborationMode::SpecificUsers && collaborators.is_empty()
}

// ============================================================================
// Section schemas
// ============================================================================

fn basic_info(form: &mut CollectionFormData, issues: &mut Issues) {
    if let Some(name) = issues.field("name", NAME.check(&form.name)) {
        form.name = name;
    }
    if let Some(description) = issues.field(
        "description",
        DESCRIPTION.check_optional(form.description.as_deref()),
    ) {
        form.description = description;
    }
    check_tags(&mut form.tags, issues);
}

fn recipes(form: &mut CollectionFormData, issues: &mut Issues) {
    check_recipes(&mut form.recipes, issues);
}

fn collaborators(form: &mut CollectionFormData, issues: &mut Issues) {
    check_collaborators(&mut form.collaborators, issues);
}

impl WizardForm for CollectionFormData {
    type Step = CollectionStep;

    fn section_schema(step: CollectionStep) -> Option<SectionSchema<Self>> {
        match step {
            CollectionStep::BasicInfo => Some(basic_info),
            CollectionStep::Recipes => Some(recipes),
            CollectionStep::Collaborators => Some(collaborators),
            CollectionStep::Review => None,
        }
    }

    fn cross_field_rules(&self, issues: &mut Issues) {
        if specific_users_without_collaborators(self.collaboration_mode, &self.collaborators) {
            issues.push("collaborators", COLLABORATORS_REQUIRED_MESSAGE);
        }
    }
}

// ============================================================================
// Partial (update) validation
// ============================================================================

/// Validates a [`CollectionFormPatch`] before it is sent as an update.
///
/// Only fields that are `Some(...)` are checked. The collaborator rule
/// applies when the patch itself sets `SPECIFIC_USERS` together with an
/// empty collaborator list. Returns the normalized patch.
pub fn validate_collection_patch(
    patch: &CollectionFormPatch,
) -> Result<CollectionFormPatch, ValidationErrors> {
    let mut normalized = patch.clone();
    let mut issues = Issues::new();

    if let Some(name) = &patch.name {
        normalized.name = issues.field("name", NAME.check(name));
    }
    if let Some(description) = &patch.description {
        if let Some(d) =
            issues.field("description", DESCRIPTION.check_optional(description.as_deref()))
        {
            normalized.description = Some(d);
        }
    }
    if let Some(tags) = normalized.tags.as_mut() {
        check_tags(tags, &mut issues);
    }
    if let Some(recipes) = normalized.recipes.as_mut() {
        check_recipes(recipes, &mut issues);
    }
    if let Some(collaborators) = normalized.collaborators.as_mut() {
        check_collaborators(collaborators, &mut issues);
    }
    if let (Some(mode), Some(collaborators)) = (patch.collaboration_mode, &patch.collaborators) {
        if specific_users_without_collaborators(mode, collaborators) {
            issues.push("collaborators", COLLABORATORS_REQUIRED_MESSAGE);
        }
    }

    issues.finish_with(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::types::Visibility;
    use crate::validation::{validate_section, validate_whole_form};

    fn valid_form() -> CollectionFormData {
        CollectionFormData::new()
            .with_name("Weeknight Dinners")
            .with_description("Fast and filling")
            .with_visibility(Visibility::Private)
            .with_tags(["quick", "family"])
            .with_recipe(RecipeRef::new("r1", 11, "Tomato Soup"))
            .with_recipe(RecipeRef::new("r2", 12, "Grilled Cheese"))
    }

    #[test]
    fn test_valid_form_passes_every_section() {
        let form = valid_form();
        for &step in <CollectionStep as crate::validation::WizardStep>::ORDER {
            assert!(validate_section(step, &form).is_ok(), "{:?} failed", step);
        }
        assert!(validate_whole_form(&form).is_ok());
    }

    #[test]
    fn test_name_boundaries() {
        assert!(NAME.check("abc").is_ok());
        assert!(NAME.check("ab").is_err());
        assert!(NAME.check(&"a".repeat(MAX_COLLECTION_NAME_LENGTH)).is_ok());
        assert_eq!(
            NAME.check(&"a".repeat(MAX_COLLECTION_NAME_LENGTH + 1))
                .unwrap_err(),
            "Collection name must be at most 100 characters"
        );
    }

    #[test]
    fn test_name_whitespace_counts_after_trim() {
        assert_eq!(
            NAME.check("  ab  ").unwrap_err(),
            "Collection name must be at least 3 characters"
        );
    }

    #[test]
    fn test_recipe_entry_rules() {
        let bad_id = RecipeRef::new("r1", 0, "Soup");
        let issue = check_recipe_entry(&bad_id).unwrap_err();
        assert_eq!(issue.path, "recipeId");
        assert_eq!(issue.message, "Invalid recipe ID");

        let blank_title = RecipeRef::new("r1", 3, "   ");
        assert_eq!(
            check_recipe_entry(&blank_title).unwrap_err().message,
            "Recipe title is required"
        );

        let trimmed = check_recipe_entry(&RecipeRef::new("r1", 3, " Soup ").with_description("  "))
            .unwrap();
        assert_eq!(trimmed.recipe_title, "Soup");
        assert_eq!(trimmed.recipe_description, None);
    }

    #[test]
    fn test_duplicate_recipe_reported_on_list() {
        let mut form = valid_form();
        form.recipes
            .push(RecipeRef::new("r3", 11, "Tomato Soup again").with_display_order(2));

        let errors = validate_section(CollectionStep::Recipes, &form).unwrap_err();
        assert_eq!(
            errors.for_field("recipes"),
            vec!["Duplicate recipe: each recipe can only be added once"]
        );
    }

    #[test]
    fn test_gap_in_display_order_rejected() {
        let mut form = valid_form();
        form.recipes[1].display_order = 5;

        let errors = validate_section(CollectionStep::Recipes, &form).unwrap_err();
        assert_eq!(
            errors.messages(),
            vec!["Recipe display order must be contiguous starting at 0"]
        );
    }

    #[test]
    fn test_entry_issue_has_nested_path() {
        let mut form = valid_form();
        form.recipes[1].recipe_id = -4;

        let errors = validate_section(CollectionStep::Recipes, &form).unwrap_err();
        assert_eq!(errors.first().unwrap().path, "recipes.1.recipeId");
    }

    #[test]
    fn test_duplicate_collaborator_rejected() {
        let form = valid_form()
            .with_collaborator(CollaboratorRef::new("c1", "u1", "ana"))
            .with_collaborator(CollaboratorRef::new("c2", "u1", "ana-again"));

        let errors = validate_section(CollectionStep::Collaborators, &form).unwrap_err();
        assert_eq!(errors.messages(), vec!["Collaborators must be unique"]);
    }

    #[test]
    fn test_collaborator_entry_rules() {
        let issue = check_collaborator_entry(&CollaboratorRef::new("  ", "u1", "ana")).unwrap_err();
        assert_eq!(issue.path, "id");
        assert_eq!(issue.message, "Collaborator key is required");

        let blank_user = CollaboratorRef::new("c1", " ", "ana");
        assert_eq!(
            check_collaborator_entry(&blank_user).unwrap_err().message,
            "Collaborator user ID is required"
        );

        let trimmed = check_collaborator_entry(&CollaboratorRef::new(" c1 ", "u1", "ana")).unwrap();
        assert_eq!(trimmed.id, "c1");
    }

    #[test]
    fn test_too_many_collaborators() {
        let mut form = valid_form();
        for i in 0..=MAX_COLLABORATORS {
            form.collaborators.push(CollaboratorRef::new(
                format!("c{}", i),
                format!("u{}", i),
                format!("user{}", i),
            ));
        }
        let errors = validate_section(CollectionStep::Collaborators, &form).unwrap_err();
        assert_eq!(errors.messages(), vec!["Maximum 20 collaborators allowed"]);
    }

    #[test]
    fn test_specific_users_not_checked_at_section_level() {
        let form = valid_form().with_collaboration_mode(CollaborationMode::SpecificUsers);
        assert!(validate_section(CollectionStep::Collaborators, &form).is_ok());

        let errors = validate_whole_form(&form).unwrap_err();
        assert_eq!(
            errors.for_field("collaborators"),
            vec![COLLABORATORS_REQUIRED_MESSAGE]
        );
    }

    #[test]
    fn test_whole_form_returns_normalized_values() {
        let form = valid_form()
            .with_name("  Weeknight Dinners  ")
            .with_tags([" quick "]);
        let validated = validate_whole_form(&form).unwrap();
        assert_eq!(validated.name, "Weeknight Dinners");
        assert_eq!(validated.tags, vec!["quick"]);
        // Input is untouched
        assert_eq!(form.name, "  Weeknight Dinners  ");
    }

    #[test]
    fn test_whole_form_collects_issues_in_step_order() {
        let form = CollectionFormData::new().with_name("ab");
        let errors = validate_whole_form(&form).unwrap_err();
        let paths: Vec<&str> = errors.issues().iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "recipes"]);
    }

    #[test]
    fn test_patch_checks_only_present_fields() {
        let patch = CollectionFormPatch {
            name: Some("  Brunch  ".into()),
            ..Default::default()
        };
        let normalized = validate_collection_patch(&patch).unwrap();
        assert_eq!(normalized.name.as_deref(), Some("Brunch"));
        assert!(normalized.recipes.is_none());
    }

    #[test]
    fn test_patch_rejects_bad_fields() {
        let patch = CollectionFormPatch {
            name: Some("x".into()),
            tags: Some(vec!["ok".into(), "not ok!".into()]),
            ..Default::default()
        };
        let errors = validate_collection_patch(&patch).unwrap_err();
        let grouped = errors.field_errors();
        assert!(grouped.contains_key("name"));
        assert!(grouped.contains_key("tags.1"));
    }

    #[test]
    fn test_patch_cross_field_when_both_present() {
        let patch = CollectionFormPatch {
            collaboration_mode: Some(CollaborationMode::SpecificUsers),
            collaborators: Some(Vec::new()),
            ..Default::default()
        };
        assert!(validate_collection_patch(&patch).is_err());
    }
}
