//! Identifier and display-name conventions shared by every aggregator.
//!
//! Dataset identifiers look like `trinket_lucky_coin` or `card_fire_bolt`:
//! a category prefix followed by `_`-separated words. Displays drop the
//! prefix and show the words separated by spaces.

use super::config::NAME_SEPARATOR;

/// Remove one leading `prefix` from `id`, if present
pub fn strip_prefix<'a>(id: &'a str, prefix: &str) -> &'a str {
    id.strip_prefix(prefix).unwrap_or(id)
}

/// Strip `prefix` and turn separators into spaces
///
/// `display_name("card_fire_bolt", "card_")` yields `"fire bolt"`.
pub fn display_name(id: &str, prefix: &str) -> String {
    strip_prefix(id, prefix).replace(NAME_SEPARATOR, " ")
}

/// Build a dataset identifier from user-facing text
///
/// Input that already carries the prefix is returned unchanged. Anything
/// else is lower-cased, spaces become separators and the prefix is added.
pub fn to_identifier(input: &str, prefix: &str) -> String {
    if input.starts_with(prefix) {
        return input.to_string();
    }
    let body = input.to_lowercase().replace(' ', &NAME_SEPARATOR.to_string());
    format!("{}{}", prefix, body)
}

/// Normalize free-text input from a pinned-item control
///
/// Returns `None` when nothing but whitespace was entered.
pub fn normalize_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
