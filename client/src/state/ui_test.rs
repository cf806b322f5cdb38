use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_page_is_dashboard() {
    let state = UiState::default();
    assert_eq!(state.page, Page::Dashboard);
}

#[test]
fn ui_state_default_sidebar_closed_and_light_theme() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
    assert!(!state.dark_mode);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn select_page_updates_page_and_closes_sidebar() {
    let mut state = UiState { sidebar_open: true, ..UiState::default() };
    state.select_page(Page::Billing);
    assert_eq!(state.page, Page::Billing);
    assert!(!state.sidebar_open);
}

#[test]
fn select_every_page_lands_exactly_there() {
    let mut state = UiState::default();
    for page in Page::ALL {
        state.toggle_sidebar();
        state.select_page(page);
        assert_eq!(state.page, page);
        assert!(!state.sidebar_open);
    }
}

#[test]
fn select_page_id_resolves_known_ids() {
    let mut state = UiState::default();
    state.select_page_id("chat");
    assert_eq!(state.page, Page::Chat);
}

#[test]
fn select_page_id_unknown_falls_back_to_dashboard() {
    let mut state = UiState { page: Page::Users, ..UiState::default() };
    state.select_page_id("reports");
    assert_eq!(state.page, Page::Dashboard);
}

#[test]
fn toggle_sidebar_flips_visibility() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
}

#[test]
fn close_sidebar_is_idempotent() {
    let mut state = UiState { sidebar_open: true, ..UiState::default() };
    state.close_sidebar();
    state.close_sidebar();
    assert!(!state.sidebar_open);
}

// =============================================================
// Page
// =============================================================

#[test]
fn page_default_is_dashboard() {
    assert_eq!(Page::default(), Page::Dashboard);
}

#[test]
fn page_ids_round_trip() {
    for page in Page::ALL {
        assert_eq!(Page::from_id(page.id()), page);
    }
}

#[test]
fn page_variants_are_distinct() {
    for (i, a) in Page::ALL.iter().enumerate() {
        for (j, b) in Page::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
                assert_ne!(a.id(), b.id());
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
