//! Billing page: revenue summary, invoice and subscription tables.

use leptos::prelude::*;

use crate::components::badge::{Badge, Tone};
use crate::components::dialog::Dialog;
use crate::components::form_field::TextField;
use crate::components::search_box::SearchBox;
use crate::components::stat_card::StatCard;
use crate::state::billing::{BillingState, BillingTab, InvoiceDraft, InvoiceStatus, SubscriptionStatus};
use crate::util::format::format_cents;

fn invoice_tone(status: InvoiceStatus) -> Tone {
    match status {
        InvoiceStatus::Paid => Tone::Success,
        InvoiceStatus::Pending => Tone::Warning,
        InvoiceStatus::Overdue => Tone::Danger,
    }
}

fn subscription_tone(status: SubscriptionStatus) -> Tone {
    match status {
        SubscriptionStatus::Active => Tone::Success,
        SubscriptionStatus::Trialing => Tone::Info,
        SubscriptionStatus::Cancelled => Tone::Neutral,
    }
}

#[component]
pub fn BillingPage() -> impl IntoView {
    let state = RwSignal::new(BillingState::default());
    let summary = Memo::new(move |_| state.with(BillingState::summary));

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let on_query = Callback::new(move |q: String| state.update(|s| s.query = q));
    let tab = move || state.with(|s| s.tab);

    view! {
        <section class="page billing-page">
            <div class="stat-grid">
                {move || {
                    let s = summary.get();
                    view! {
                        <StatCard label="Paid" value=format_cents(s.paid_cents)/>
                        <StatCard label="Outstanding" value=format_cents(s.outstanding_cents)/>
                        <StatCard label="Overdue Invoices" value=s.overdue_count.to_string()/>
                        <StatCard label="Monthly Recurring" value=format_cents(s.mrr_cents)/>
                    }
                }}
            </div>

            <div class="page__toolbar">
                <div class="tabs">
                    {BillingTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab() == t
                                    on:click=move |_| state.update(|s| s.select_tab(t))
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <span class="page__spacer"></span>
                <SearchBox query=query on_change=on_query placeholder="Search billing..."/>
                <button class="btn btn--primary" on:click=move |_| state.update(|s| s.invoice_dialog_open = true)>
                    "+ Create Invoice"
                </button>
            </div>

            <div class="panel">
                {move || match tab() {
                    BillingTab::Invoices => view! { <InvoiceTable state=state/> }.into_any(),
                    BillingTab::Subscriptions => view! { <SubscriptionTable state=state/> }.into_any(),
                }}
            </div>

            <Show when=move || state.with(|s| s.invoice_dialog_open)>
                <InvoiceDialog state=state/>
            </Show>
        </section>
    }
}

#[component]
fn InvoiceTable(state: RwSignal<BillingState>) -> impl IntoView {
    let rows = move || {
        state.with(|s| {
            s.visible_invoices()
                .into_iter()
                .map(|inv| {
                    view! {
                        <tr>
                            <td class="table__primary">{inv.number.clone()}</td>
                            <td>{inv.customer.clone()}</td>
                            <td>{format_cents(inv.amount_cents)}</td>
                            <td>
                                <Badge label=inv.status.label() tone=invoice_tone(inv.status)/>
                            </td>
                            <td>{inv.issued.clone()}</td>
                            <td>{inv.due.clone()}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Invoice"</th>
                    <th>"Customer"</th>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                    <th>"Issued"</th>
                    <th>"Due"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn SubscriptionTable(state: RwSignal<BillingState>) -> impl IntoView {
    let rows = move || {
        state.with(|s| {
            s.visible_subscriptions()
                .into_iter()
                .map(|sub| {
                    view! {
                        <tr>
                            <td class="table__primary">{sub.customer.clone()}</td>
                            <td>{sub.plan.clone()}</td>
                            <td>{format!("{}/mo", format_cents(sub.amount_cents))}</td>
                            <td>
                                <Badge label=sub.status.label() tone=subscription_tone(sub.status)/>
                            </td>
                            <td>{sub.renews.clone()}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Customer"</th>
                    <th>"Plan"</th>
                    <th>"Price"</th>
                    <th>"Status"</th>
                    <th>"Renews"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn InvoiceDialog(state: RwSignal<BillingState>) -> impl IntoView {
    let draft = RwSignal::new(InvoiceDraft::default());
    let on_close = Callback::new(move |()| state.update(|s| s.invoice_dialog_open = false));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if state.try_update(|s| s.create_invoice(&current)).flatten().is_none() {
            log::debug!("invoice draft rejected");
        }
    };

    view! {
        <Dialog title="Create Invoice" on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <TextField
                    label="Customer"
                    required=true
                    value=Signal::derive(move || draft.with(|d| d.customer.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.customer = v))
                />
                <TextField
                    label="Amount"
                    placeholder="$0.00"
                    required=true
                    value=Signal::derive(move || draft.with(|d| d.amount.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.amount = v))
                />
                <TextField
                    label="Due"
                    placeholder="Net 30"
                    value=Signal::derive(move || draft.with(|d| d.due.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.due = v))
                />
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "Create"
                    </button>
                </div>
            </form>
        </Dialog>
    }
}
