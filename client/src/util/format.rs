//! Display formatting and amount parsing.
//!
//! Money is carried as integer cents everywhere in `state`; this module is the
//! only place it turns into (or comes back from) text.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render cents as `$1,234.56`.
pub fn format_cents(cents: u64) -> String {
    let dollars = cents / 100;
    let rem = cents % 100;
    format!("${}.{rem:02}", format_count(dollars))
}

/// Render cents as whole dollars, `$48,200`.
pub fn format_dollars(cents: u64) -> String {
    format!("${}", format_count(cents / 100))
}

/// Render tenths of a percent, `245` as `24.5%`. `None` renders as a dash.
pub fn format_rate_tenths(tenths: Option<u64>) -> String {
    tenths.map_or_else(|| "-".to_owned(), |t| format!("{}.{}%", t / 10, t % 10))
}

/// Render a count with thousands separators, `2,500`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse a user-entered amount (`"1250"`, `"1250.5"`, `"$1,250.50"`) into cents.
///
/// Returns `None` for empty input, more than two decimal places, non-digit
/// characters, overflow, or a zero amount.
pub fn parse_amount_cents(input: &str) -> Option<u64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let (whole, frac) = match cleaned.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (cleaned.as_str(), ""),
    };
    if frac.len() > 2 || !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    if whole.is_empty() && frac.is_empty() {
        return None;
    }

    let whole_cents = if whole.is_empty() {
        0
    } else {
        whole.parse::<u64>().map_or(None, |w| w.checked_mul(100))?
    };
    let frac_cents = match frac.len() {
        0 => 0,
        1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
        _ => frac.parse::<u64>().unwrap_or(0),
    };

    let total = whole_cents.checked_add(frac_cents)?;
    (total > 0).then_some(total)
}

/// Up to two uppercase initials for avatar bubbles.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Truncate to at most `max` characters, appending an ellipsis when cut.
pub fn excerpt(text: &str, max: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max {
        return trimmed.to_owned();
    }
    let cut: String = trimmed.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}
