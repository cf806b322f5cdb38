//! Search input that re-filters its page on every keystroke.

use leptos::prelude::*;

#[component]
pub fn SearchBox(query: Signal<String>, on_change: Callback<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="search-box">
            <span class="search-box__icon" aria-hidden="true">"⌕"</span>
            <input
                class="search-box__input"
                type="search"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
