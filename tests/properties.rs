//! Property tests for draft store invariants.
//!
//! Random operation sequences are applied to a store; after every call the
//! recipe display order must be dense and no identity key may repeat.

use std::collections::HashSet;

use proptest::prelude::*;
use recipeforms::collection::{CollaboratorRef, RecipeRef};
use recipeforms::{Config, DraftState, DraftStore};

#[derive(Clone, Debug)]
enum Op {
    AddRecipe(i64),
    RemoveRecipe(usize),
    Reverse,
    Rotate(usize),
    SetRecipes(Vec<(i64, u32)>),
    AddCollaborator(u8),
    AddTag(String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1i64..20).prop_map(Op::AddRecipe),
        (0usize..10).prop_map(Op::RemoveRecipe),
        Just(Op::Reverse),
        (0usize..5).prop_map(Op::Rotate),
        prop::collection::vec((1i64..6, 0u32..20), 0..6).prop_map(Op::SetRecipes),
        (0u8..10).prop_map(Op::AddCollaborator),
        "[a-cA-C]{1,2}".prop_map(Op::AddTag),
    ]
}

fn current_recipes(store: &DraftStore) -> Option<Vec<RecipeRef>> {
    store.draft().map(|d| d.recipes.clone())
}

fn apply(store: &mut DraftStore, op: &Op) {
    match op {
        Op::AddRecipe(recipe_id) => {
            let key = format!("key-{}", recipe_id);
            store.add_draft_recipe(RecipeRef::new(key, *recipe_id, "Recipe"));
        }
        Op::RemoveRecipe(index) => {
            let key = store
                .draft()
                .and_then(|d| d.recipes.get(*index))
                .map(|r| r.id.clone());
            if let Some(key) = key {
                store.remove_draft_recipe(&key);
            }
        }
        Op::Reverse => {
            if let Some(mut recipes) = current_recipes(store) {
                recipes.reverse();
                store.reorder_draft_recipes(recipes);
            }
        }
        Op::Rotate(by) => {
            if let Some(mut recipes) = current_recipes(store) {
                if !recipes.is_empty() {
                    let by = by % recipes.len();
                    recipes.rotate_left(by);
                }
                store.reorder_draft_recipes(recipes);
            }
        }
        Op::SetRecipes(entries) => {
            let recipes = entries
                .iter()
                .map(|&(recipe_id, order)| {
                    RecipeRef::new(format!("key-{}", recipe_id), recipe_id, "Recipe")
                        .with_display_order(order)
                })
                .collect();
            store.set_draft_recipes(recipes);
        }
        Op::AddCollaborator(user) => {
            let user_id = format!("user-{}", user);
            store.add_draft_collaborator(CollaboratorRef::new(
                format!("c-{}", user),
                user_id,
                "name",
            ));
        }
        Op::AddTag(tag) => {
            store.add_draft_tag(tag);
        }
    }
}

proptest! {
    #[test]
    fn display_order_stays_dense(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = DraftStore::new(Config::default()).unwrap();
        store.initialize_draft();

        for op in &ops {
            apply(&mut store, op);
            let draft = store.draft().unwrap();
            let orders: Vec<u32> = draft.recipes.iter().map(|r| r.display_order).collect();
            let expected: Vec<u32> = (0..draft.recipes.len() as u32).collect();
            prop_assert_eq!(orders, expected);
        }
    }

    #[test]
    fn identity_keys_never_repeat(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = DraftStore::new(Config::default()).unwrap();
        store.initialize_draft();

        for op in &ops {
            apply(&mut store, op);
        }

        let draft = store.draft().unwrap();
        let recipe_ids: HashSet<i64> = draft.recipes.iter().map(|r| r.recipe_id).collect();
        prop_assert_eq!(recipe_ids.len(), draft.recipes.len());

        let user_ids: HashSet<&str> = draft.collaborators.iter().map(|c| c.user_id.as_str()).collect();
        prop_assert_eq!(user_ids.len(), draft.collaborators.len());

        let tags: HashSet<String> = draft.tags.iter().map(|t| t.to_lowercase()).collect();
        prop_assert_eq!(tags.len(), draft.tags.len());
    }

    #[test]
    fn operations_without_draft_leave_state_empty(ops in prop::collection::vec(op(), 0..20)) {
        let mut store = DraftStore::new(Config::default()).unwrap();

        for op in &ops {
            apply(&mut store, op);
        }

        prop_assert_eq!(store.state(), &DraftState::default());
    }
}
