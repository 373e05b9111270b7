//! Schema validation engine.
//!
//! Validation is a pure function of its input: nothing here mutates the
//! value being checked, retries, or blocks. Normalization (trimming) is part
//! of validation, so successful results hand back the normalized value.
//!
//! - [`rules`]: the combinators schemas are built from
//! - [`wizard`]: section lookup, step gating and whole-form validation
//! - [`field`]: single-field validation by [`FieldKind`]

pub mod field;
pub mod rules;
pub(crate) mod tags;
pub mod wizard;

pub use field::{validate_field, FieldKind, FieldOutcome, FieldValue};
pub use rules::{Issues, ListRule, NumberRule, TextRule};
pub use wizard::{
    is_section_complete, section_error_messages, validate_section, validate_section_by_id,
    validate_steps_up_to, validate_whole_form, SectionSchema, StepFailure, WizardForm, WizardStep,
};

use std::ops::Deref;

/// A form that passed whole-form validation, in normalized form.
///
/// Only [`validate_whole_form`] constructs this, so request conversion that
/// takes a `&Validated<T>` cannot be reached with an unchecked draft.
#[derive(Clone, Debug, PartialEq)]
pub struct Validated<T>(pub(crate) T);

impl<T> Validated<T> {
    /// Returns the normalized form.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Validated<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}
