//! The draft store's state cell.

use serde::{Deserialize, Serialize};

use crate::collection::CollectionFormData;
use crate::types::{DraftId, Timestamp};

/// Everything the draft store holds.
///
/// An empty state (the `Default`) has no draft, no id, no timestamp and is
/// not saving. `draft_collection_id` is set whenever `draft_collection` is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftState {
    /// The draft being edited, if any.
    pub draft_collection: Option<CollectionFormData>,

    /// Id minted when the draft was created; stable across edits.
    pub draft_collection_id: Option<DraftId>,

    /// When the draft content last changed.
    pub draft_last_modified: Option<Timestamp>,

    /// Whether a save to the server is in flight.
    pub is_draft_saving: bool,
}

impl DraftState {
    /// Returns true if a draft exists.
    #[inline]
    pub fn has_draft(&self) -> bool {
        self.draft_collection.is_some()
    }
}
