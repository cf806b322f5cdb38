//! Summary figure card used on the home and billing pages.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: String,
    #[prop(optional)] delta: Option<&'static str>,
    #[prop(optional)] trend_up: bool,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            {delta
                .map(|delta| {
                    view! {
                        <span class="stat-card__delta" class:stat-card__delta--up=trend_up class:stat-card__delta--down={!trend_up}>
                            {delta}
                            " from last month"
                        </span>
                    }
                })}
        </div>
    }
}
