//! Modal overlay used by every create-style form.
//!
//! Visibility is owned by the caller (a boolean in the page model); this
//! component only renders the backdrop, the frame, and the close affordances.

use leptos::prelude::*;

/// Backdrop + dialog frame. Clicking the backdrop, the close button, or
/// pressing Escape runs `on_close`.
#[component]
pub fn Dialog(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close" aria-label="Close">
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
