//! Case-insensitive substring matching for list search boxes.
//!
//! DESIGN
//! ======
//! Every list page filters on each keystroke, so matching is a pure function
//! over borrowed fields. A blank query matches everything.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Lowercased, trimmed form of a search query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// True when `query` is blank or occurs (case-insensitively) in any field.
pub fn matches_any(query: &str, fields: &[&str]) -> bool {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}
