//! Field-level checks shared by signup and the creation dialogs.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// True for empty or whitespace-only input.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Loose `local@domain.tld` check.
///
/// Requires exactly one `@`, no whitespace, a non-empty local part, and a
/// domain with a dot that has at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}
