//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and shared widgets. Shell components
//! read `SessionState`/`UiState` from context; widgets take plain props.

pub mod badge;
pub mod dialog;
pub mod form_field;
pub mod header;
pub mod search_box;
pub mod sidebar;
pub mod stat_card;
