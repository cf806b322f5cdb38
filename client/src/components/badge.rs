//! Colored status pill.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "badge badge--success",
            Self::Warning => "badge badge--warning",
            Self::Danger => "badge badge--danger",
            Self::Info => "badge badge--info",
            Self::Neutral => "badge badge--neutral",
        }
    }
}

#[component]
pub fn Badge(label: &'static str, tone: Tone) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}
