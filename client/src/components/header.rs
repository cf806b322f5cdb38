//! Top bar: sidebar toggle, page title, theme toggle, current user, logout.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let title = move || ui.with(|u| u.page.title());
    let email = move || session.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    let on_toggle_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.with_untracked(|u| u.dark_mode));
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="header">
            <button
                class="btn header__menu"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
                title="Toggle navigation"
                aria-label="Toggle navigation"
            >
                "☰"
            </button>
            <h1 class="header__title">{title}</h1>
            <span class="header__spacer"></span>
            <button class="btn header__theme" on:click=on_toggle_theme title="Toggle dark mode">
                {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
            </button>
            <span class="header__user">{email}</span>
            <button class="btn header__logout" on:click=move |_| session.update(SessionState::logout) title="Log out">
                "Logout"
            </button>
        </header>
    }
}
