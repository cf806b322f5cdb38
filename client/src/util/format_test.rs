use super::*;

// =============================================================
// format_cents / format_dollars
// =============================================================

#[test]
fn format_cents_groups_thousands() {
    assert_eq!(format_cents(123_456), "$1,234.56");
    assert_eq!(format_cents(100_000_000), "$1,000,000.00");
}

#[test]
fn format_cents_pads_small_amounts() {
    assert_eq!(format_cents(5), "$0.05");
    assert_eq!(format_cents(0), "$0.00");
}

#[test]
fn format_dollars_drops_cents() {
    assert_eq!(format_dollars(4_820_099), "$48,200");
    assert_eq!(format_dollars(99_900), "$999");
}

#[test]
fn format_count_groups_thousands() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(2_500), "2,500");
    assert_eq!(format_count(1_234_567), "1,234,567");
}

#[test]
fn format_rate_tenths_places_decimal() {
    assert_eq!(format_rate_tenths(Some(245)), "24.5%");
    assert_eq!(format_rate_tenths(Some(1000)), "100.0%");
    assert_eq!(format_rate_tenths(Some(5)), "0.5%");
    assert_eq!(format_rate_tenths(None), "-");
}

// =============================================================
// parse_amount_cents
// =============================================================

#[test]
fn parse_amount_accepts_plain_and_decorated_input() {
    assert_eq!(parse_amount_cents("1250"), Some(125_000));
    assert_eq!(parse_amount_cents("1250.5"), Some(125_050));
    assert_eq!(parse_amount_cents("$1,250.50"), Some(125_050));
    assert_eq!(parse_amount_cents("  .75 "), Some(75));
}

#[test]
fn parse_amount_rejects_garbage() {
    assert_eq!(parse_amount_cents(""), None);
    assert_eq!(parse_amount_cents("."), None);
    assert_eq!(parse_amount_cents("abc"), None);
    assert_eq!(parse_amount_cents("-5"), None);
    assert_eq!(parse_amount_cents("1.234"), None);
    assert_eq!(parse_amount_cents("1.2.3"), None);
}

#[test]
fn parse_amount_rejects_zero() {
    assert_eq!(parse_amount_cents("0"), None);
    assert_eq!(parse_amount_cents("0.00"), None);
}

#[test]
fn parse_amount_rejects_overflow() {
    assert_eq!(parse_amount_cents("999999999999999999999"), None);
}

// =============================================================
// initials / excerpt
// =============================================================

#[test]
fn initials_takes_first_two_words() {
    assert_eq!(initials("sarah johnson"), "SJ");
    assert_eq!(initials("Mary Ann Lee"), "MA");
    assert_eq!(initials("Cher"), "C");
    assert_eq!(initials("   "), "");
}

#[test]
fn excerpt_keeps_short_text() {
    assert_eq!(excerpt("  hello  ", 10), "hello");
}

#[test]
fn excerpt_cuts_long_text_with_ellipsis() {
    assert_eq!(excerpt("The quick brown fox", 9), "The quick…");
}
