//! Draft state store for the create-collection wizard.
//!
//! The store keeps a half-filled form between wizard steps (and, with
//! storage attached, between sessions). It depends only on the form's data
//! shape; validation is a separate call the UI makes when the user moves on.

mod state;
mod store;

pub use state::DraftState;
pub use store::DraftStore;
