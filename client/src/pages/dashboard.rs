//! Authenticated shell: sidebar, header, and the selected page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the app root only while a session exists. The body swaps on
//! `UiState::page`; each page builds its own state on mount, so leaving a page
//! discards whatever was added there.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::pages::billing::BillingPage;
use crate::pages::chat::ChatPage;
use crate::pages::customers::CustomersPage;
use crate::pages::email::EmailPage;
use crate::pages::home::HomePage;
use crate::pages::users::UsersPage;
use crate::state::ui::{Page, UiState};

#[component]
pub fn DashboardShell() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let page = Memo::new(move |_| ui.with(|u| u.page));

    let body = move || match page.get() {
        Page::Dashboard => view! { <HomePage/> }.into_any(),
        Page::Customers => view! { <CustomersPage/> }.into_any(),
        Page::Email => view! { <EmailPage/> }.into_any(),
        Page::Chat => view! { <ChatPage/> }.into_any(),
        Page::Billing => view! { <BillingPage/> }.into_any(),
        Page::Users => view! { <UsersPage/> }.into_any(),
    };

    view! {
        <div class="app-layout" class:app-layout--dark=move || ui.with(|u| u.dark_mode)>
            <Sidebar/>
            <div class="app-layout__main">
                <Header/>
                <main class="app-layout__content">{body}</main>
            </div>
        </div>
    }
}
