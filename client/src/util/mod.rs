//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and text handling from
//! page and component logic so the `state` models stay testable off-browser.

pub mod dark_mode;
pub mod format;
pub mod search;
pub mod validate;
