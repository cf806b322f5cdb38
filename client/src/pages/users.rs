//! User management page: team table, role filter, invite dialog.

use leptos::prelude::*;

use crate::components::badge::{Badge, Tone};
use crate::components::dialog::Dialog;
use crate::components::form_field::{SelectField, TextField};
use crate::components::search_box::SearchBox;
use crate::state::users::{Role, UserDraft, UserStatus, UsersState};
use crate::util::format::initials;

fn status_tone(status: UserStatus) -> Tone {
    match status {
        UserStatus::Active => Tone::Success,
        UserStatus::Invited => Tone::Warning,
        UserStatus::Suspended => Tone::Danger,
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let state = RwSignal::new(UsersState::default());
    let draft = RwSignal::new(UserDraft::default());

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let on_query = Callback::new(move |q: String| state.update(|s| s.query = q));
    let role_filter = move || state.with(|s| s.role_filter);

    let on_open = move |_| {
        draft.set(UserDraft::default());
        state.update(|s| s.add_dialog_open = true);
    };
    let on_close = Callback::new(move |()| state.update(|s| s.add_dialog_open = false));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if state.try_update(|s| s.add_user(&current)).flatten().is_none() {
            log::debug!("user draft incomplete");
        }
    };

    let rows = move || {
        state.with(|s| {
            let visible = s.visible();
            if visible.is_empty() {
                return view! {
                    <tr>
                        <td class="table__empty" colspan="4">"No users found."</td>
                    </tr>
                }
                .into_any();
            }
            visible
                .into_iter()
                .map(|u| {
                    view! {
                        <tr>
                            <td>
                                <span class="table__person">
                                    <span class="avatar">{initials(&u.name)}</span>
                                    <span>
                                        <span class="table__primary">{u.name.clone()}</span>
                                        <span class="table__secondary">{u.email.clone()}</span>
                                    </span>
                                </span>
                            </td>
                            <td>{u.role.label()}</td>
                            <td>
                                <Badge label=u.status.label() tone=status_tone(u.status)/>
                            </td>
                            <td>{u.last_active.clone()}</td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <section class="page users-page">
            <div class="page__toolbar">
                <SearchBox query=query on_change=on_query placeholder="Search users..."/>
                <span class="page__spacer"></span>
                <span class="chip">
                    "Active: " {move || state.with(UsersState::active_count)}
                </span>
                <button class="btn btn--primary" on:click=on_open>
                    "+ Add User"
                </button>
            </div>

            <div class="chip-row">
                <button
                    class="chip chip--button"
                    class:chip--active=move || role_filter().is_none()
                    on:click=move |_| state.update(|s| s.role_filter = None)
                >
                    "All: "
                    {move || state.with(|s| s.users.len())}
                </button>
                {Role::ALL
                    .into_iter()
                    .map(|role| {
                        view! {
                            <button
                                class="chip chip--button"
                                class:chip--active=move || role_filter() == Some(role)
                                on:click=move |_| state.update(|s| s.role_filter = Some(role))
                            >
                                {role.label()}
                                ": "
                                {move || state.with(|s| s.count_by_role(role))}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="panel">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                            <th>"Last Active"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <Show when=move || state.with(|s| s.add_dialog_open)>
                <Dialog title="Add User" on_close=on_close>
                    <form class="dialog__form" on:submit=on_submit>
                        <TextField
                            label="Full Name"
                            required=true
                            value=Signal::derive(move || draft.with(|d| d.name.clone()))
                            on_input=Callback::new(move |v: String| draft.update(|d| d.name = v))
                        />
                        <TextField
                            label="Email"
                            input_type="email"
                            required=true
                            value=Signal::derive(move || draft.with(|d| d.email.clone()))
                            on_input=Callback::new(move |v: String| draft.update(|d| d.email = v))
                        />
                        <SelectField
                            label="Role"
                            options=Role::options()
                            value=Signal::derive(move || draft.with(|d| d.role.id().to_owned()))
                            on_change=Callback::new(move |v: String| {
                                draft.update(|d| d.role = Role::from_id(&v).unwrap_or_default());
                            })
                        />
                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn--primary">
                                "Send Invite"
                            </button>
                        </div>
                    </form>
                </Dialog>
            </Show>
        </section>
    }
}
