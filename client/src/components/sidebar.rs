//! Left navigation rail listing the six dashboard pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of `UiState::page`. On narrow layouts the rail is an
//! overlay; picking a page or tapping the scrim closes it.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::{Page, UiState};
use crate::util::format::initials;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let user_name = move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let user_role = move || session.with(|s| s.user.as_ref().map(|u| u.role.clone()).unwrap_or_default());

    view! {
        <aside class="sidebar" class:sidebar--open=move || ui.with(|u| u.sidebar_open)>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"◆"</span>
                <span class="sidebar__title">"CRM Pro"</span>
            </div>
            <nav class="sidebar__nav">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="sidebar__link"
                                class:sidebar__link--active=move || ui.with(|u| u.page == page)
                                on:click=move |_| ui.update(|u| u.select_page(page))
                            >
                                <span class="sidebar__icon" aria-hidden="true">{page.icon()}</span>
                                <span class="sidebar__label">{page.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <span class="avatar">{move || initials(&user_name())}</span>
                <span class="sidebar__user">
                    <span class="sidebar__user-name">{user_name}</span>
                    <span class="sidebar__user-role">{user_role}</span>
                </span>
            </div>
        </aside>
        <Show when=move || ui.with(|u| u.sidebar_open)>
            <div class="sidebar-scrim" on:click=move |_| ui.update(UiState::close_sidebar)></div>
        </Show>
    }
}
