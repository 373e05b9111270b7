//! Composable field rules.
//!
//! Each rule is a small builder holding `(bound, message)` pairs. Checking
//! a value returns either the normalized value or the message of the first
//! rule it broke. Schemas are assembled from these once (see the `LazyLock`
//! statics in the wizard modules) and then applied to every draft.
//!
//! ```text
//! TextRule::new().trim().min(3, "...").max(100, "...")   ← one field
//! ListRule::new().max(10, "...").unique_by(key, "...")    ← one array field
//! Issues::field(path, rule.check(value))                  ← attach to a path
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Issue, ValidationErrors};

/// A bound paired with the message shown when it is broken.
type Bound<T> = Option<(T, String)>;

// ============================================================================
// Text
// ============================================================================

/// Rule set for one string field.
#[derive(Clone, Debug, Default)]
pub struct TextRule {
    trim: bool,
    min: Bound<usize>,
    max: Bound<usize>,
    pattern: Option<(&'static LazyLock<Regex>, String)>,
}

impl TextRule {
    /// Creates a rule that accepts any string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strips surrounding whitespace before the length and pattern checks.
    pub fn trim(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Minimum length in characters.
    pub fn min(mut self, len: usize, message: impl Into<String>) -> Self {
        self.min = Some((len, message.into()));
        self
    }

    /// Maximum length in characters.
    pub fn max(mut self, len: usize, message: impl Into<String>) -> Self {
        self.max = Some((len, message.into()));
        self
    }

    /// Whole-value pattern the string must match.
    pub fn pattern(mut self, regex: &'static LazyLock<Regex>, message: impl Into<String>) -> Self {
        self.pattern = Some((regex, message.into()));
        self
    }

    /// Checks `raw`, returning the normalized string.
    pub fn check(&self, raw: &str) -> Result<String, String> {
        let value = if self.trim { raw.trim() } else { raw };
        let len = value.chars().count();

        if let Some((min, message)) = &self.min {
            if len < *min {
                return Err(message.clone());
            }
        }
        if let Some((max, message)) = &self.max {
            if len > *max {
                return Err(message.clone());
            }
        }
        if let Some((regex, message)) = &self.pattern {
            if !regex.is_match(value) {
                return Err(message.clone());
            }
        }

        Ok(value.to_string())
    }

    /// Checks an optional string.
    ///
    /// `None` passes. With trimming enabled, a blank string normalizes to
    /// `None` instead of failing the minimum length.
    pub fn check_optional(&self, raw: Option<&str>) -> Result<Option<String>, String> {
        match raw {
            None => Ok(None),
            Some(s) if self.trim && s.trim().is_empty() => Ok(None),
            Some(s) => self.check(s).map(Some),
        }
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// Rule set for one numeric field.
#[derive(Clone, Debug)]
pub struct NumberRule<T> {
    greater_than: Bound<T>,
    min: Bound<T>,
    max: Bound<T>,
}

impl<T> Default for NumberRule<T> {
    fn default() -> Self {
        Self {
            greater_than: None,
            min: None,
            max: None,
        }
    }
}

impl<T: PartialOrd + Copy + fmt::Debug> NumberRule<T> {
    /// Creates a rule that accepts any value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclusive lower bound.
    pub fn greater_than(mut self, bound: T, message: impl Into<String>) -> Self {
        self.greater_than = Some((bound, message.into()));
        self
    }

    /// Inclusive lower bound.
    pub fn min(mut self, bound: T, message: impl Into<String>) -> Self {
        self.min = Some((bound, message.into()));
        self
    }

    /// Inclusive upper bound.
    pub fn max(mut self, bound: T, message: impl Into<String>) -> Self {
        self.max = Some((bound, message.into()));
        self
    }

    /// Checks `value`.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn check(&self, value: T) -> Result<T, String> {
        if let Some((bound, message)) = &self.greater_than {
            // NaN fails every comparison, so it is rejected here too
            if !(value > *bound) {
                return Err(message.clone());
            }
        }
        if let Some((bound, message)) = &self.min {
            if !(value >= *bound) {
                return Err(message.clone());
            }
        }
        if let Some((bound, message)) = &self.max {
            if !(value <= *bound) {
                return Err(message.clone());
            }
        }
        Ok(value)
    }

    /// Checks an optional value; `None` passes.
    pub fn check_optional(&self, value: Option<T>) -> Result<Option<T>, String> {
        value.map(|v| self.check(v)).transpose()
    }
}

// ============================================================================
// Lists
// ============================================================================

/// Rule set for an ordered array field.
///
/// Per-item rules are applied by the caller; this checks the array as a
/// whole: count bounds, identity uniqueness and positional consistency.
pub struct ListRule<T> {
    min: Bound<usize>,
    max: Bound<usize>,
    unique: Option<(fn(&T) -> String, String)>,
    positioned: Option<(fn(&T, usize) -> bool, String)>,
}

impl<T> Default for ListRule<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            unique: None,
            positioned: None,
        }
    }
}

impl<T> ListRule<T> {
    /// Creates a rule that accepts any list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum item count.
    pub fn min(mut self, count: usize, message: impl Into<String>) -> Self {
        self.min = Some((count, message.into()));
        self
    }

    /// Maximum item count.
    pub fn max(mut self, count: usize, message: impl Into<String>) -> Self {
        self.max = Some((count, message.into()));
        self
    }

    /// No two items may share the same identity key.
    pub fn unique_by(mut self, key: fn(&T) -> String, message: impl Into<String>) -> Self {
        self.unique = Some((key, message.into()));
        self
    }

    /// Every item must agree with its index (e.g. `display_order == index`).
    pub fn positioned(mut self, at: fn(&T, usize) -> bool, message: impl Into<String>) -> Self {
        self.positioned = Some((at, message.into()));
        self
    }

    /// Checks the list, returning the first broken rule's message.
    pub fn check(&self, items: &[T]) -> Result<(), String> {
        if let Some((min, message)) = &self.min {
            if items.len() < *min {
                return Err(message.clone());
            }
        }
        if let Some((max, message)) = &self.max {
            if items.len() > *max {
                return Err(message.clone());
            }
        }
        if let Some((key, message)) = &self.unique {
            let mut seen = std::collections::HashSet::with_capacity(items.len());
            if !items.iter().all(|item| seen.insert(key(item))) {
                return Err(message.clone());
            }
        }
        if let Some((at, message)) = &self.positioned {
            if !items.iter().enumerate().all(|(i, item)| at(item, i)) {
                return Err(message.clone());
            }
        }
        Ok(())
    }
}

// ============================================================================
// Issue collection
// ============================================================================

/// Collects issues while a schema walks a form.
#[derive(Debug, Default)]
pub struct Issues {
    issues: Vec<Issue>,
}

impl Issues {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue.
    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue::new(path, message));
    }

    /// Records the failure of `result` under `path`, passing a success through.
    pub fn field<T>(&mut self, path: impl Into<String>, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.push(path, message);
                None
            }
        }
    }

    /// Records an issue raised with a path relative to `prefix`.
    pub fn nested(&mut self, prefix: &str, issue: Issue) {
        self.issues
            .push(Issue::new(format!("{}.{}", prefix, issue.path), issue.message));
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of issues recorded so far.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Finishes collection.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        self.finish_with(())
    }

    /// Finishes collection, yielding `value` when nothing was recorded.
    pub fn finish_with<T>(self, value: T) -> Result<T, ValidationErrors> {
        match ValidationErrors::from_issues(self.issues) {
            None => Ok(value),
            Some(errors) => Err(errors),
        }
    }
}
