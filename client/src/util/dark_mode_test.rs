use super::*;

// =============================================================
// Attribute and storage encoding
// =============================================================

#[test]
fn theme_name_maps_flag_to_attribute() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn only_literal_true_is_a_dark_preference() {
    assert!(parse_stored("true"));
    assert!(!parse_stored("false"));
    assert!(!parse_stored(""));
    assert!(!parse_stored("TRUE"));
}

// =============================================================
// Server-side rendering
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn ssr_renders_light_theme() {
    assert!(!read_preference());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn toggle_twice_returns_to_start() {
    let start = read_preference();
    let flipped = toggle(start);
    assert_ne!(flipped, start);
    assert_eq!(toggle(flipped), start);
}
