//! Markup generation, one module per diagram family.
//!
//! Every generator is a pure function from `(rows, options)` to markup. The
//! shared helpers below implement the row-field conventions all families
//! agree on: an absent and an empty field are the same thing, list fields
//! split on a separator with whitespace trimmed and empties dropped, and
//! block identifiers normalize whitespace runs to underscores.

pub(crate) mod class_diagram;
pub(crate) mod er;
pub(crate) mod flowchart;
pub(crate) mod gantt;
pub(crate) mod mindmap;
pub(crate) mod pie;
pub(crate) mod sequence;
pub(crate) mod state;
pub(crate) mod timeline;

/// The field's value when it is present and non-empty.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// The field's text, defaulting to the empty string.
fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

/// Splits a list field on `separator`, trimming items and dropping empties.
fn split_list(raw: &str, separator: char) -> impl Iterator<Item = &str> {
    raw.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

/// Replaces every whitespace run with a single underscore.
///
/// Used for identifiers embedded in markup (subgraph keys, participant
/// keys) whose display label keeps the original text.
fn normalize_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let mut in_whitespace = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                key.push('_');
            }
            in_whitespace = true;
        } else {
            key.push(ch);
            in_whitespace = false;
        }
    }
    key
}
