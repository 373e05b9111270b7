//! The draft store.
//!
//! [`DraftStore`] owns at most one collection draft. Every operation is
//! total: when no draft exists, mutations do nothing and queries answer
//! with zero or `false`. Structural invariants hold after every call:
//!
//! - recipe `display_order` values are `0..n` in list order
//! - no two recipes share a `recipe_id`
//! - no two collaborators share a `user_id`
//! - no two tags are equal ignoring case

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::state::DraftState;
use crate::collection::{
    CollaborationMode, CollaboratorRef, CollectionFormData, CollectionFormPatch, RecipeRef,
    Visibility,
};
use crate::config::Config;
use crate::error::Result;
use crate::storage::{DraftStorage, PersistedDraft};
use crate::types::{DraftId, Timestamp};
use crate::validation::tags::same_tag;

/// Holds one in-progress collection draft and writes it through to storage.
///
/// # Example
///
/// ```rust
/// use recipeforms::{Config, DraftStore};
///
/// let mut store = DraftStore::new(Config::default())?;
/// store.initialize_draft();
/// store.update_draft_name("Weeknight Dinners");
/// store.add_draft_tag("quick");
/// store.add_draft_tag("Quick"); // ignored
///
/// assert!(store.has_unsaved_draft());
/// assert_eq!(store.draft().unwrap().tags, vec!["quick"]);
/// # Ok::<(), recipeforms::FormError>(())
/// ```
pub struct DraftStore {
    config: Config,
    state: DraftState,
    storage: Option<Arc<dyn DraftStorage>>,
}

impl std::fmt::Debug for DraftStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftStore")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("persistent", &self.storage.is_some())
            .finish()
    }
}

impl DraftStore {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty store with no persistence.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Config`](crate::FormError::Config) if `config`
    /// is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: DraftState::default(),
            storage: None,
        })
    }

    /// Creates an empty store that writes through to `storage`.
    ///
    /// Any entry already under the configured key is left alone until the
    /// first change. Use [`restore`](Self::restore) to pick it up instead.
    pub fn with_storage(config: Config, storage: Arc<dyn DraftStorage>) -> Result<Self> {
        let mut store = Self::new(config)?;
        store.storage = Some(storage);
        Ok(store)
    }

    /// Creates a store hydrated from `storage`.
    ///
    /// A missing entry yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry exists but cannot be decoded or was
    /// written with another schema version.
    #[instrument(skip(config, storage), fields(key = %config.storage_key))]
    pub fn restore(config: Config, storage: Arc<dyn DraftStorage>) -> Result<Self> {
        let mut store = Self::with_storage(config, storage.clone())?;

        if let Some(persisted) = storage.load(&store.config.storage_key)? {
            store.state = persisted.into_state();
            info!(
                has_draft = store.state.has_draft(),
                draft_id = ?store.state.draft_collection_id,
                "Draft restored"
            );
        } else {
            debug!("No persisted draft");
        }

        Ok(store)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The full state.
    #[inline]
    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// The draft being edited, if any.
    #[inline]
    pub fn draft(&self) -> Option<&CollectionFormData> {
        self.state.draft_collection.as_ref()
    }

    /// The current draft's id.
    #[inline]
    pub fn draft_id(&self) -> Option<&DraftId> {
        self.state.draft_collection_id.as_ref()
    }

    /// When the draft content last changed.
    #[inline]
    pub fn last_modified(&self) -> Option<Timestamp> {
        self.state.draft_last_modified
    }

    /// Whether a save is in flight.
    #[inline]
    pub fn is_saving(&self) -> bool {
        self.state.is_draft_saving
    }

    /// The store's configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Replaces the draft wholesale under a freshly generated id.
    ///
    /// Duplicate list entries after the first are dropped and recipes are
    /// renumbered. The saving flag is left as it is.
    pub fn set_draft_collection(&mut self, mut draft: CollectionFormData) {
        enforce_list_invariants(&mut draft);
        let id = self.generate_draft_id();
        debug!(draft_id = %id, "Draft set");

        self.state.draft_collection = Some(draft);
        self.state.draft_collection_id = Some(id);
        self.state.draft_last_modified = Some(Timestamp::now());
        self.write_through();
    }

    /// Starts an empty draft unless one already exists.
    ///
    /// Returns `true` if a draft was created.
    pub fn initialize_draft(&mut self) -> bool {
        if self.state.has_draft() {
            return false;
        }
        self.set_draft_collection(CollectionFormData::default());
        true
    }

    /// Shallow-merges `patch` into the draft.
    pub fn update_draft_collection(&mut self, patch: CollectionFormPatch) {
        self.mutate("update", |draft| {
            patch.apply_to(draft);
            enforce_list_invariants(draft);
            true
        });
    }

    /// Resets every state field and removes the persisted entry.
    pub fn clear_draft_collection(&mut self) {
        debug!(draft_id = ?self.state.draft_collection_id, "Draft cleared");
        self.state = DraftState::default();

        if let Some(storage) = &self.storage {
            if let Err(e) = storage.remove(&self.config.storage_key) {
                warn!(error = %e, key = %self.config.storage_key, "Failed to remove persisted draft");
            }
        }
    }

    /// Sets the saving flag. Draft content and timestamp are untouched.
    pub fn set_draft_saving(&mut self, saving: bool) {
        self.state.is_draft_saving = saving;
        self.write_through();
    }

    // =========================================================================
    // Scalar fields
    // =========================================================================

    /// Sets the name.
    pub fn update_draft_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.mutate("name", |draft| {
            draft.name = name;
            true
        });
    }

    /// Sets or clears the description.
    pub fn update_draft_description(&mut self, description: Option<String>) {
        self.mutate("description", |draft| {
            draft.description = description;
            true
        });
    }

    /// Sets the visibility.
    pub fn update_draft_visibility(&mut self, visibility: Visibility) {
        self.mutate("visibility", |draft| {
            draft.visibility = visibility;
            true
        });
    }

    /// Sets the collaboration mode.
    pub fn update_draft_collaboration_mode(&mut self, mode: CollaborationMode) {
        self.mutate("collaboration_mode", |draft| {
            draft.collaboration_mode = mode;
            true
        });
    }

    // =========================================================================
    // Tags
    // =========================================================================

    /// Replaces the tag list, keeping the first of tags equal ignoring case.
    pub fn update_draft_tags(&mut self, tags: Vec<String>) {
        self.mutate("tags", |draft| {
            draft.tags = dedup_tags(tags);
            true
        });
    }

    /// Appends `tag` after trimming.
    ///
    /// Blank input and tags already present (ignoring case) are ignored.
    /// Returns `true` if the tag was appended.
    pub fn add_draft_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        self.mutate("add_tag", |draft| {
            if draft.tags.iter().any(|t| same_tag(t, tag)) {
                return false;
            }
            draft.tags.push(tag.to_string());
            true
        })
    }

    /// Removes tags exactly equal to `tag`.
    pub fn remove_draft_tag(&mut self, tag: &str) {
        self.mutate("remove_tag", |draft| {
            let before = draft.tags.len();
            draft.tags.retain(|t| t != tag);
            draft.tags.len() != before
        });
    }

    // =========================================================================
    // Recipes
    // =========================================================================

    /// Replaces the recipe list.
    ///
    /// Later entries repeating a `recipe_id` are dropped; the rest are
    /// renumbered in list order.
    pub fn set_draft_recipes(&mut self, recipes: Vec<RecipeRef>) {
        self.mutate("set_recipes", |draft| {
            draft.recipes = dedup_recipes(recipes);
            true
        });
    }

    /// Appends `recipe` at the next display slot.
    ///
    /// Ignored if a recipe with the same `recipe_id` is already in the draft.
    /// Returns `true` if the recipe was appended.
    pub fn add_draft_recipe(&mut self, recipe: RecipeRef) -> bool {
        self.mutate("add_recipe", |draft| {
            if draft.recipes.iter().any(|r| r.recipe_id == recipe.recipe_id) {
                return false;
            }
            let display_order = draft.recipes.len() as u32;
            draft.recipes.push(recipe.with_display_order(display_order));
            true
        })
    }

    /// Removes the recipe with draft-local key `id` and renumbers the rest.
    pub fn remove_draft_recipe(&mut self, id: &str) {
        self.mutate("remove_recipe", |draft| {
            let before = draft.recipes.len();
            draft.recipes.retain(|r| r.id != id);
            if draft.recipes.len() == before {
                return false;
            }
            renumber(&mut draft.recipes);
            true
        });
    }

    /// Replaces the recipes with `recipes`, renumbered to their new positions.
    pub fn reorder_draft_recipes(&mut self, recipes: Vec<RecipeRef>) {
        self.mutate("reorder_recipes", |draft| {
            draft.recipes = dedup_recipes(recipes);
            true
        });
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Replaces the collaborator list, keeping the first entry per `user_id`.
    pub fn set_draft_collaborators(&mut self, collaborators: Vec<CollaboratorRef>) {
        self.mutate("set_collaborators", |draft| {
            draft.collaborators = dedup_collaborators(collaborators);
            true
        });
    }

    /// Appends `collaborator` unless its `user_id` is already present.
    ///
    /// Returns `true` if the collaborator was appended.
    pub fn add_draft_collaborator(&mut self, collaborator: CollaboratorRef) -> bool {
        self.mutate("add_collaborator", |draft| {
            if draft
                .collaborators
                .iter()
                .any(|c| c.user_id == collaborator.user_id)
            {
                return false;
            }
            draft.collaborators.push(collaborator);
            true
        })
    }

    /// Removes the collaborator with draft-local key `id`.
    pub fn remove_draft_collaborator(&mut self, id: &str) {
        self.mutate("remove_collaborator", |draft| {
            let before = draft.collaborators.len();
            draft.collaborators.retain(|c| c.id != id);
            draft.collaborators.len() != before
        });
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns true if a draft exists and has anything worth keeping.
    pub fn has_unsaved_draft(&self) -> bool {
        self.draft().is_some_and(CollectionFormData::has_content)
    }

    /// Mints a new draft id under the configured prefix.
    ///
    /// Successive calls in one process never return the same id.
    pub fn generate_draft_id(&self) -> DraftId {
        DraftId::generate(&self.config.draft_id_prefix)
    }

    /// Number of recipes in the draft; 0 without a draft.
    pub fn draft_recipe_count(&self) -> usize {
        self.draft().map_or(0, |d| d.recipes.len())
    }

    /// Number of collaborators in the draft; 0 without a draft.
    pub fn draft_collaborator_count(&self) -> usize {
        self.draft().map_or(0, |d| d.collaborators.len())
    }

    /// Returns true if the draft contains the recipe with server id `recipe_id`.
    pub fn is_draft_recipe_selected(&self, recipe_id: i64) -> bool {
        self.draft()
            .is_some_and(|d| d.recipes.iter().any(|r| r.recipe_id == recipe_id))
    }

    /// Returns true if the draft contains the collaborator `user_id`.
    pub fn is_draft_collaborator_selected(&self, user_id: &str) -> bool {
        self.draft()
            .is_some_and(|d| d.collaborators.iter().any(|c| c.user_id == user_id))
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Writes the current state to storage.
    ///
    /// Does nothing without storage.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the write fails.
    pub fn persist(&self) -> Result<()> {
        match &self.storage {
            Some(storage) => storage.save(
                &self.config.storage_key,
                &PersistedDraft::new(self.state.clone()),
            ),
            None => Ok(()),
        }
    }

    fn write_through(&self) {
        if !self.config.persist_on_mutation {
            return;
        }
        if let Err(e) = self.persist() {
            warn!(error = %e, key = %self.config.storage_key, "Failed to persist draft");
        }
    }

    /// Applies `op` to the draft if there is one.
    ///
    /// `op` returns whether it changed anything; only then is the draft
    /// stamped and written through.
    fn mutate(&mut self, action: &'static str, op: impl FnOnce(&mut CollectionFormData) -> bool) -> bool {
        let Some(draft) = self.state.draft_collection.as_mut() else {
            debug!(action, "No draft; ignoring");
            return false;
        };
        if !op(draft) {
            return false;
        }

        self.state.draft_last_modified = Some(Timestamp::now());
        debug!(
            action,
            draft_id = ?self.state.draft_collection_id,
            recipes = draft.recipes.len(),
            collaborators = draft.collaborators.len(),
            "Draft updated"
        );
        self.write_through();
        true
    }
}

fn renumber(recipes: &mut [RecipeRef]) {
    for (i, recipe) in recipes.iter_mut().enumerate() {
        recipe.display_order = i as u32;
    }
}

fn dedup_recipes(recipes: Vec<RecipeRef>) -> Vec<RecipeRef> {
    let mut seen = HashSet::new();
    let mut kept: Vec<RecipeRef> = recipes
        .into_iter()
        .filter(|r| seen.insert(r.recipe_id))
        .collect();
    renumber(&mut kept);
    kept
}

fn dedup_collaborators(collaborators: Vec<CollaboratorRef>) -> Vec<CollaboratorRef> {
    let mut seen = HashSet::new();
    collaborators
        .into_iter()
        .filter(|c| seen.insert(c.user_id.clone()))
        .collect()
}

fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !kept.iter().any(|t| same_tag(t, &tag)) {
            kept.push(tag);
        }
    }
    kept
}

/// Applies the list invariants to a draft whose lists were replaced wholesale.
fn enforce_list_invariants(draft: &mut CollectionFormData) {
    draft.recipes = dedup_recipes(std::mem::take(&mut draft.recipes));
    draft.collaborators = dedup_collaborators(std::mem::take(&mut draft.collaborators));
    draft.tags = dedup_tags(std::mem::take(&mut draft.tags));
}
