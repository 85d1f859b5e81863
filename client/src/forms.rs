//! Helpers for the admin forms that edit string-list fields through a single
//! comma-separated text input.

/// Comma-separated input → list: segments are trimmed, empty ones dropped.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|segment| segment.trim())
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
        .collect()
}

/// List → the text shown back in the form input.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}
