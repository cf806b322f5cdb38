//! Customers page: searchable table, status filter, add-customer dialog.

use leptos::prelude::*;

use crate::components::badge::{Badge, Tone};
use crate::components::dialog::Dialog;
use crate::components::form_field::{SelectField, TextField};
use crate::components::search_box::SearchBox;
use crate::state::customers::{CustomerDraft, CustomerStatus, CustomersState};
use crate::util::format::{format_cents, initials};

fn status_tone(status: CustomerStatus) -> Tone {
    match status {
        CustomerStatus::Active => Tone::Success,
        CustomerStatus::Inactive => Tone::Neutral,
        CustomerStatus::Lead => Tone::Info,
    }
}

#[component]
pub fn CustomersPage() -> impl IntoView {
    let state = RwSignal::new(CustomersState::default());
    let draft = RwSignal::new(CustomerDraft::default());

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let on_query = Callback::new(move |q: String| state.update(|s| s.query = q));

    let on_filter = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.status_filter = CustomerStatus::from_id(&value));
    };

    let on_open = move |_| {
        draft.set(CustomerDraft::default());
        state.update(CustomersState::open_add_dialog);
    };
    let on_close = Callback::new(move |()| state.update(CustomersState::close_add_dialog));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if state.try_update(|s| s.add_customer(&current)).flatten().is_none() {
            log::debug!("customer draft incomplete");
        }
    };

    let rows = move || {
        let visible: Vec<_> = state.with(|s| s.visible().into_iter().cloned().collect());
        if visible.is_empty() {
            return view! {
                <tr>
                    <td class="table__empty" colspan="6">"No customers found."</td>
                </tr>
            }
            .into_any();
        }
        visible
            .into_iter()
            .map(|c| {
                view! {
                    <tr>
                        <td>
                            <span class="table__person">
                                <span class="avatar">{initials(&c.name)}</span>
                                <span>
                                    <span class="table__primary">{c.name}</span>
                                    <span class="table__secondary">{c.email}</span>
                                </span>
                            </span>
                        </td>
                        <td>{c.company}</td>
                        <td>{c.phone}</td>
                        <td>
                            <Badge label=c.status.label() tone=status_tone(c.status)/>
                        </td>
                        <td>{format_cents(c.total_spent_cents)}</td>
                        <td>{c.last_contact}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="page customers-page">
            <div class="page__toolbar">
                <SearchBox query=query on_change=on_query placeholder="Search customers..."/>
                <select class="page__filter" on:change=on_filter>
                    <option value="all">"All statuses"</option>
                    {CustomerStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.id()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <span class="page__spacer"></span>
                <button class="btn btn--primary" on:click=on_open>
                    "+ Add Customer"
                </button>
            </div>

            <div class="chip-row">
                {CustomerStatus::ALL
                    .into_iter()
                    .map(|s| {
                        view! {
                            <span class="chip">
                                {s.label()}
                                ": "
                                {move || state.with(|st| st.count_by_status(s))}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="panel">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Customer"</th>
                            <th>"Company"</th>
                            <th>"Phone"</th>
                            <th>"Status"</th>
                            <th>"Total Spent"</th>
                            <th>"Last Contact"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <Show when=move || state.with(|s| s.add_dialog_open)>
                <Dialog title="Add Customer" on_close=on_close>
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
                        <TextField
                            label="Phone"
                            input_type="tel"
                            value=Signal::derive(move || draft.with(|d| d.phone.clone()))
                            on_input=Callback::new(move |v: String| draft.update(|d| d.phone = v))
                        />
                        <TextField
                            label="Company"
                            value=Signal::derive(move || draft.with(|d| d.company.clone()))
                            on_input=Callback::new(move |v: String| draft.update(|d| d.company = v))
                        />
                        <SelectField
                            label="Status"
                            options=CustomerStatus::options()
                            value=Signal::derive(move || draft.with(|d| d.status.id().to_owned()))
                            on_change=Callback::new(move |v: String| {
                                draft.update(|d| d.status = CustomerStatus::from_id(&v).unwrap_or_default());
                            })
                        />
                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn--primary">
                                "Add Customer"
                            </button>
                        </div>
                    </form>
                </Dialog>
            </Show>
        </section>
    }
}
