//! Tag rules shared by the collection and recipe wizards.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{Issues, ListRule, TextRule};
use crate::limits::{MAX_TAGS, MAX_TAG_LENGTH};

/// Letters, digits, spaces and hyphens.
static TAG_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 -]+$").expect("tag charset pattern is valid"));

pub(crate) static TAG: LazyLock<TextRule> = LazyLock::new(|| {
    TextRule::new()
        .trim()
        .min(1, "Tag cannot be empty")
        .max(
            MAX_TAG_LENGTH,
            format!("Tag must be at most {} characters", MAX_TAG_LENGTH),
        )
        .pattern(
            &TAG_CHARSET,
            "Tags can only contain letters, numbers, spaces, and hyphens",
        )
});

static TAGS: LazyLock<ListRule<String>> = LazyLock::new(|| {
    ListRule::<String>::new()
        .max(MAX_TAGS, format!("Maximum {} tags allowed", MAX_TAGS))
        .unique_by(|tag| tag.to_lowercase(), "Tags must be unique")
});

/// Case-insensitive tag equality, as used for deduplication.
pub(crate) fn same_tag(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Checks each tag, normalizes them in place, then checks the list.
///
/// Uniqueness is judged on the trimmed values.
pub(crate) fn check_tags(tags: &mut [String], issues: &mut Issues) {
    for (i, tag) in tags.iter_mut().enumerate() {
        if let Some(normalized) = issues.field(format!("tags.{}", i), TAG.check(tag)) {
            *tag = normalized;
        }
    }
    issues.field("tags", TAGS.check(tags));
}
