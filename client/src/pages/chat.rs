//! Chat page: contact list on the left, selected thread on the right.

use leptos::prelude::*;

use crate::components::search_box::SearchBox;
use crate::state::chat::{Author, ChatState};
use crate::util::format::{excerpt, initials};

const LIST_PREVIEW_CHARS: usize = 36;

#[component]
pub fn ChatPage() -> impl IntoView {
    let state = RwSignal::new(ChatState::default());
    let draft = RwSignal::new(String::new());

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let on_query = Callback::new(move |q: String| state.update(|s| s.query = q));

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = draft.get_untracked();
        if state.try_update(|s| s.send_message(&body)).flatten().is_some() {
            draft.set(String::new());
        }
    };

    let contacts = move || {
        state.with(|s| {
            s.visible_contacts()
                .into_iter()
                .map(|c| {
                    let id = c.id;
                    let preview = s
                        .last_message(id)
                        .map(|m| excerpt(&m.body, LIST_PREVIEW_CHARS))
                        .unwrap_or_default();
                    let selected = s.selected == Some(id);
                    view! {
                        <li
                            class="chat__contact"
                            class:chat__contact--selected=selected
                            on:click=move |_| {
                                state.update(|s| {
                                    s.select_contact(id);
                                });
                            }
                        >
                            <span class="avatar" class:avatar--online=c.online>{initials(&c.name)}</span>
                            <span class="chat__contact-body">
                                <span class="table__primary">{c.name.clone()}</span>
                                <span class="table__secondary">{preview}</span>
                            </span>
                            {(c.unread > 0).then(|| view! { <span class="tabs__count">{c.unread}</span> })}
                        </li>
                    }
                })
                .collect_view()
        })
    };

    let thread = move || {
        state.with(|s| {
            let Some(contact) = s.selected_contact() else {
                return view! { <p class="panel__empty">"Select a conversation."</p> }.into_any();
            };
            let messages = s
                .thread(contact.id)
                .into_iter()
                .map(|m| {
                    view! {
                        <div class="chat__bubble" class:chat__bubble--mine={m.author == Author::Me}>
                            <span class="chat__text">{m.body.clone()}</span>
                            <span class="chat__time">{m.time.clone()}</span>
                        </div>
                    }
                })
                .collect_view();
            view! {
                <div class="chat__thread-header">
                    <span class="table__primary">{contact.name.clone()}</span>
                    <span class="table__secondary">
                        {contact.title.clone()}
                        {if contact.online { " · Online" } else { " · Offline" }}
                    </span>
                </div>
                <div class="chat__messages">{messages}</div>
            }
            .into_any()
        })
    };

    view! {
        <section class="page chat-page">
            <div class="chat panel">
                <aside class="chat__contacts">
                    <SearchBox query=query on_change=on_query placeholder="Search contacts..."/>
                    <ul class="chat__contact-list">{contacts}</ul>
                </aside>
                <div class="chat__thread">
                    {thread}
                    <form class="chat__composer" on:submit=on_send>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Type a message..."
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                            disabled=move || state.with(|s| s.selected.is_none())
                        />
                        <button type="submit" class="btn btn--primary">
                            "Send"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
