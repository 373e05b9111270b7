//! Step-gated validation for multi-step wizards.
//!
//! A wizard form implements [`WizardForm`]: it names its step enum and maps
//! each step to a [`SectionSchema`]. Everything else (single-section checks,
//! "may the user jump to step N", whole-form validation) is generic and
//! lives here.
//!
//! # Validation Layers
//!
//! ```text
//! validate_whole_form()
//!     ├── every section schema, in step order
//!     └── WizardForm::cross_field_rules()   ← only at whole-form scope
//!
//! validate_steps_up_to(target)
//!     └── validate_section(step) for step in ORDER[..=target], stop at first failure
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::rules::Issues;
use super::Validated;
use crate::error::ValidationErrors;

/// Validates the fields owned by one step.
///
/// A schema receives a working copy of the form: it records issues and
/// writes normalized values (trimmed strings, blank optionals cleared) back
/// into the copy.
pub type SectionSchema<F> = fn(&mut F, &mut Issues);

/// A step of a wizard, in a fixed order.
pub trait WizardStep: Copy + Eq + fmt::Debug + FromStr + Into<&'static str> + 'static {
    /// All steps, first to last.
    const ORDER: &'static [Self];

    /// Stable identifier, e.g. `BASIC_INFO`.
    fn id(self) -> &'static str {
        self.into()
    }

    /// Parses a step identifier. Unknown identifiers yield `None`.
    fn from_id(id: &str) -> Option<Self> {
        Self::from_str(id).ok()
    }

    /// Zero-based position in [`ORDER`](Self::ORDER).
    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|s| *s == self)
            .unwrap_or(Self::ORDER.len())
    }

    /// The step after this one, if any.
    fn next(self) -> Option<Self> {
        Self::ORDER.get(self.position() + 1).copied()
    }

    /// The step before this one, if any.
    fn previous(self) -> Option<Self> {
        self.position()
            .checked_sub(1)
            .and_then(|i| Self::ORDER.get(i).copied())
    }
}

/// A form driven by a multi-step wizard.
pub trait WizardForm: Clone {
    /// The wizard's step enum.
    type Step: WizardStep;

    /// Looks up the schema for `step`.
    ///
    /// `None` means the step owns no fields (e.g. a review page) and always
    /// validates.
    fn section_schema(step: Self::Step) -> Option<SectionSchema<Self>>;

    /// Rules spanning several sections, checked only by
    /// [`validate_whole_form`].
    fn cross_field_rules(&self, _issues: &mut Issues) {}
}

/// The first step that failed while gating navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepFailure<S> {
    /// The earliest invalid step.
    pub step: S,
    /// What is wrong with it.
    pub errors: ValidationErrors,
}

impl<S: WizardStep> fmt::Display for StepFailure<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} is invalid: {}", self.step.id(), self.errors)
    }
}

impl<S: WizardStep> std::error::Error for StepFailure<S> {}

fn run_section<F: WizardForm>(step: F::Step, working: &mut F, issues: &mut Issues) {
    if let Some(schema) = F::section_schema(step) {
        schema(working, issues);
    }
}

/// Validates the fields owned by one step. Never mutates `form`.
pub fn validate_section<F: WizardForm>(step: F::Step, form: &F) -> Result<(), ValidationErrors> {
    let Some(schema) = F::section_schema(step) else {
        return Ok(());
    };

    let mut working = form.clone();
    let mut issues = Issues::new();
    schema(&mut working, &mut issues);

    if !issues.is_empty() {
        debug!(step = step.id(), issues = issues.len(), "Section failed validation");
    }
    issues.finish()
}

/// Validates a section addressed by its string identifier.
///
/// An unrecognized identifier validates successfully: the wizard is never
/// blocked on a step this crate does not know about.
pub fn validate_section_by_id<F: WizardForm>(id: &str, form: &F) -> Result<(), ValidationErrors> {
    match F::Step::from_id(id) {
        Some(step) => validate_section(step, form),
        None => {
            debug!(step = id, "Unknown step id, skipping validation");
            Ok(())
        }
    }
}

/// Validates every step from the first through `target`, inclusive.
///
/// Stops at the first invalid step, so an earlier failure is always reported
/// ahead of a later one.
pub fn validate_steps_up_to<F: WizardForm>(
    target: F::Step,
    form: &F,
) -> Result<(), StepFailure<F::Step>> {
    for &step in F::Step::ORDER {
        if let Err(errors) = validate_section(step, form) {
            return Err(StepFailure { step, errors });
        }
        if step == target {
            break;
        }
    }
    Ok(())
}

/// Validates the entire form, including cross-field rules.
///
/// On success the normalized form is returned wrapped in [`Validated`];
/// use it rather than the raw input.
pub fn validate_whole_form<F: WizardForm>(form: &F) -> Result<Validated<F>, ValidationErrors> {
    let mut working = form.clone();
    let mut issues = Issues::new();

    for &step in F::Step::ORDER {
        run_section(step, &mut working, &mut issues);
    }
    working.cross_field_rules(&mut issues);

    if !issues.is_empty() {
        debug!(issues = issues.len(), "Form failed whole-form validation");
    }
    issues.finish_with(Validated(working))
}

/// Boolean wrapper over [`validate_section`].
pub fn is_section_complete<F: WizardForm>(step: F::Step, form: &F) -> bool {
    validate_section(step, form).is_ok()
}

/// Display strings for a section's errors; empty when the section is valid.
pub fn section_error_messages<F: WizardForm>(step: F::Step, form: &F) -> Vec<String> {
    match validate_section(step, form) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.messages(),
    }
}
