//! String utilities for catalog text.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Placeholder the provider uses for "no value" in display fields.
pub const DISPLAY_PLACEHOLDER: &str = "-";

/// Converts a display placeholder (`"-"`) or blank string to `None`.
///
/// # Examples
///
/// ```
/// use spellbook_domain::common::none_if_placeholder;
///
/// assert_eq!(none_if_placeholder("Evocation".to_string()), Some("Evocation".to_string()));
/// assert_eq!(none_if_placeholder("-".to_string()), None);
/// assert_eq!(none_if_placeholder("  ".to_string()), None);
/// ```
pub fn none_if_placeholder(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == DISPLAY_PLACEHOLDER {
        None
    } else {
        Some(value)
    }
}

/// Builds a collation key for display-order comparisons.
///
/// The key is NFD-decomposed with combining marks removed and lower-cased,
/// so `"Ácido"` and `"acido"` produce the same key.
///
/// # Examples
///
/// ```
/// use spellbook_domain::common::collation_key;
///
/// assert_eq!(collation_key("Ácido Salpicado"), "acido salpicado");
/// assert_eq!(collation_key("FIREBALL"), "fireball");
/// ```
pub fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compares two display names the way a reader expects them ordered.
///
/// Accents and case are ignored first; names that only differ in those fall
/// back to a plain comparison so the ordering stays total.
pub fn compare_display_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring test used by free-text search.
///
/// An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
