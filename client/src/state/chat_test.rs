use super::*;

// =============================================================
// Defaults + selection
// =============================================================

#[test]
fn default_selects_first_contact() {
    let state = ChatState::default();
    assert_eq!(state.selected, Some(1));
    assert_eq!(state.selected_contact().map(|c| c.name.as_str()), Some("Sarah Johnson"));
}

#[test]
fn select_contact_clears_unread() {
    let mut state = ChatState::default();
    assert_eq!(state.total_unread(), 3);

    assert!(state.select_contact(2));
    assert_eq!(state.selected, Some(2));
    assert_eq!(state.contacts.get(2).map(|c| c.unread), Some(0));
    assert_eq!(state.total_unread(), 1);
}

#[test]
fn select_unknown_contact_keeps_selection() {
    let mut state = ChatState::default();
    assert!(!state.select_contact(42));
    assert_eq!(state.selected, Some(1));
}

#[test]
fn search_filters_contacts_by_name_or_title() {
    let state = ChatState { query: "engineer".to_owned(), ..ChatState::default() };
    let hits = state.visible_contacts();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "David Kim");

    let state = ChatState { query: "xyz".to_owned(), ..ChatState::default() };
    assert!(state.visible_contacts().is_empty());
}

// =============================================================
// Threads
// =============================================================

#[test]
fn thread_returns_only_that_contact_in_order() {
    let state = ChatState::default();
    let ids: Vec<u32> = state.thread(1).iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(state.thread(99).is_empty());
}

#[test]
fn last_message_is_newest_in_thread() {
    let state = ChatState::default();
    assert_eq!(state.last_message(2).map(|m| m.id), Some(5));
    assert_eq!(state.last_message(99), None);
}

// =============================================================
// Sending
// =============================================================

#[test]
fn send_message_appends_to_selected_thread() {
    let mut state = ChatState::default();
    state.select_contact(3);
    let id = state.send_message("  See you at standup ").unwrap();

    assert_eq!(id, 9);
    let last = state.last_message(3).unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.author, Author::Me);
    assert_eq!(last.body, "See you at standup");
    assert_eq!(state.thread(3).len(), 2);
}

#[test]
fn send_message_generates_no_reply() {
    let mut state = ChatState::default();
    let before = state.messages.len();
    state.send_message("hello").unwrap();
    assert_eq!(state.messages.len(), before + 1);
}

#[test]
fn blank_message_is_not_sent() {
    let mut state = ChatState::default();
    assert_eq!(state.send_message("   "), None);
    assert_eq!(state.messages.len(), 8);
}

#[test]
fn message_without_selection_is_not_sent() {
    let mut state = ChatState { selected: None, ..ChatState::default() };
    assert_eq!(state.send_message("hello"), None);
}
