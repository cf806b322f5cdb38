//! Labelled inputs bound to a draft field.

use leptos::prelude::*;

/// Single-line input. `value` is read reactively; edits go to `on_input`.
#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Dropdown over `(value, label)` options.
#[component]
pub fn SelectField(
    label: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <select
                class="dialog__input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
