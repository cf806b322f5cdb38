//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by page so each view depends on one small model. Models are
//! plain structs with explicit methods; components wrap them in `RwSignal`s.
//! `session` and `ui` are shared through context, every other model is owned
//! by the page that creates it and is rebuilt from its seed on each visit.

pub mod billing;
pub mod chat;
pub mod customers;
pub mod email;
pub mod home;
pub mod list;
pub mod session;
pub mod signup;
pub mod ui;
pub mod users;
