//! Page modules for the two top-level views and the six dashboard pages.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state model and delegates shared widgets to
//! `components`. `login` and `dashboard` are the only pages the app root
//! renders directly.

pub mod billing;
pub mod chat;
pub mod customers;
pub mod dashboard;
pub mod email;
pub mod home;
pub mod login;
pub mod signup;
pub mod users;
