//! Integration tests for the draft store.
//!
//! These tests verify the end-to-end behavior of:
//! - Tag, recipe and collaborator list maintenance
//! - No-op behavior without a draft
//! - Timestamps and id stability
//! - Driving validation from store contents

use recipeforms::collection::{
    CollaborationMode, CollaboratorRef, CollectionFormData, CollectionFormPatch, CollectionStep,
    RecipeRef, Visibility,
};
use recipeforms::validation::{validate_section, validate_whole_form};
use recipeforms::{Config, DraftState, DraftStore};

fn store() -> DraftStore {
    let mut store = DraftStore::new(Config::default()).unwrap();
    store.initialize_draft();
    store
}

fn recipe(key: &str, recipe_id: i64) -> RecipeRef {
    RecipeRef::new(key, recipe_id, format!("Recipe {}", recipe_id))
}

// ============================================================================
// List Maintenance Tests
// ============================================================================

#[test]
fn test_tag_added_twice_with_different_case() {
    let mut store = store();
    store.add_draft_tag("Tag1");
    store.add_draft_tag("tag1");
    assert_eq!(store.draft().unwrap().tags.len(), 1);
}

#[test]
fn test_remove_middle_recipe_renumbers() {
    let mut store = store();
    store.add_draft_recipe(recipe("a", 1));
    store.add_draft_recipe(recipe("b", 2));
    store.add_draft_recipe(recipe("c", 3));

    store.remove_draft_recipe("b");

    let recipes = &store.draft().unwrap().recipes;
    let got: Vec<(i64, u32)> = recipes.iter().map(|r| (r.recipe_id, r.display_order)).collect();
    assert_eq!(got, vec![(1, 0), (3, 1)]);
}

#[test]
fn test_remove_unknown_recipe_changes_nothing() {
    let mut store = store();
    store.add_draft_recipe(recipe("a", 1));
    let before = store.state().clone();

    store.remove_draft_recipe("zzz");
    assert_eq!(store.state(), &before);
}

#[test]
fn test_recipe_count_and_selection() {
    let mut store = store();
    assert_eq!(store.draft_recipe_count(), 0);
    store.add_draft_recipe(recipe("a", 7));
    assert_eq!(store.draft_recipe_count(), 1);
    assert!(store.is_draft_recipe_selected(7));
}

// ============================================================================
// No-Draft Tests
// ============================================================================

#[test]
fn test_mutations_without_draft_are_no_ops() {
    let mut store = DraftStore::new(Config::default()).unwrap();

    store.update_draft_collection(CollectionFormPatch {
        name: Some("x".into()),
        ..Default::default()
    });
    store.update_draft_name("Name");
    store.update_draft_description(Some("d".into()));
    store.update_draft_visibility(Visibility::Private);
    store.update_draft_collaboration_mode(CollaborationMode::AllUsers);
    store.update_draft_tags(vec!["t".into()]);
    assert!(!store.add_draft_tag("t"));
    store.remove_draft_tag("t");
    store.set_draft_recipes(vec![recipe("a", 1)]);
    assert!(!store.add_draft_recipe(recipe("a", 1)));
    store.remove_draft_recipe("a");
    store.reorder_draft_recipes(vec![recipe("a", 1)]);
    store.set_draft_collaborators(vec![CollaboratorRef::new("c", "u", "n")]);
    assert!(!store.add_draft_collaborator(CollaboratorRef::new("c", "u", "n")));
    store.remove_draft_collaborator("c");

    assert_eq!(store.state(), &DraftState::default());
}

#[test]
fn test_queries_without_draft() {
    let store = DraftStore::new(Config::default()).unwrap();
    assert!(!store.has_unsaved_draft());
    assert_eq!(store.draft_recipe_count(), 0);
    assert_eq!(store.draft_collaborator_count(), 0);
    assert!(!store.is_draft_recipe_selected(1));
    assert!(!store.is_draft_collaborator_selected("u1"));
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

#[test]
fn test_mutation_stamps_last_modified() {
    let mut store = store();
    let created = store.last_modified().unwrap();

    std::thread::sleep(std::time::Duration::from_millis(2));
    store.update_draft_name("Later");
    assert!(store.last_modified().unwrap() > created);
}

#[test]
fn test_generated_ids_are_distinct() {
    let store = store();
    let ids: Vec<_> = (0..100).map(|_| store.generate_draft_id()).collect();
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_custom_id_prefix() {
    let config = Config {
        draft_id_prefix: "recipe-draft".into(),
        ..Default::default()
    };
    let mut store = DraftStore::new(config).unwrap();
    store.initialize_draft();
    assert!(store.draft_id().unwrap().as_str().starts_with("recipe-draft_"));
}

#[test]
fn test_set_draft_keeps_saving_flag() {
    let mut store = store();
    store.set_draft_saving(true);
    store.set_draft_collection(CollectionFormData::new().with_name("Fresh"));
    assert!(store.is_saving());
}

// ============================================================================
// Store + Validation Tests
// ============================================================================

#[test]
fn test_store_built_draft_validates() {
    let mut store = store();
    store.update_draft_name("  Brunch Ideas ");
    store.add_draft_tag("weekend");
    store.add_draft_recipe(recipe("a", 1));
    store.add_draft_recipe(recipe("b", 2));
    store.remove_draft_recipe("a");
    store.update_draft_collaboration_mode(CollaborationMode::SpecificUsers);

    let draft = store.draft().unwrap();
    assert!(validate_section(CollectionStep::Recipes, draft).is_ok());
    assert!(validate_whole_form(draft).is_err());

    store.add_draft_collaborator(CollaboratorRef::new("c1", "u1", "jo"));
    let validated = validate_whole_form(store.draft().unwrap()).unwrap();
    assert_eq!(validated.name, "Brunch Ideas");
}
