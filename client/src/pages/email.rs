//! Email page: mail folders, campaigns, templates and analytics behind one tab strip.

use leptos::prelude::*;

use crate::components::badge::{Badge, Tone};
use crate::components::dialog::Dialog;
use crate::components::form_field::{SelectField, TextField};
use crate::components::search_box::SearchBox;
use crate::components::stat_card::StatCard;
use crate::state::email::{
    AUDIENCES, CampaignAction, CampaignDraft, CampaignKind, CampaignStatus, ComposeDraft, EmailDialog, EmailState,
    EmailTab, FREQUENCIES, InboxFilter, TRIGGERS, TemplateDraft,
};
use crate::util::format::{format_count, format_rate_tenths};

fn campaign_tone(status: CampaignStatus) -> Tone {
    match status {
        CampaignStatus::Draft => Tone::Neutral,
        CampaignStatus::Scheduled => Tone::Info,
        CampaignStatus::Sent => Tone::Success,
    }
}

/// Launcher card title and blurb.
fn launcher_copy(kind: CampaignKind) -> (&'static str, &'static str) {
    match kind {
        CampaignKind::FollowUp => ("Follow-up Email", "Auto-email new customers"),
        CampaignKind::Promotional => ("Promotional", "Sales and special offers"),
        CampaignKind::Newsletter => ("Group Email", "Newsletters to a segment"),
        CampaignKind::Custom => ("Custom Campaign", "Build from scratch"),
    }
}

fn dialog_title(kind: CampaignKind) -> &'static str {
    match kind {
        CampaignKind::FollowUp => "Create Follow-up Campaign",
        CampaignKind::Promotional => "Create Promotional Campaign",
        CampaignKind::Newsletter => "Create Group Email / Newsletter",
        CampaignKind::Custom => "Create Custom Campaign",
    }
}

fn primary_label(kind: CampaignKind) -> &'static str {
    match kind.primary_action() {
        CampaignAction::SaveDraft => "Save Draft",
        CampaignAction::Schedule if kind == CampaignKind::FollowUp => "Create Campaign",
        CampaignAction::Schedule => "Schedule",
        CampaignAction::SendNow => "Send Now",
    }
}

/// "98 (65.3%)", or a dash before anything has happened.
fn count_with_rate(count: u32, rate: Option<u64>) -> String {
    if count == 0 {
        return "-".to_owned();
    }
    format!("{} ({})", format_count(count.into()), format_rate_tenths(rate))
}

#[component]
pub fn EmailPage() -> impl IntoView {
    let state = RwSignal::new(EmailState::default());
    let dialog = Memo::new(move |_| state.with(|s| s.dialog));

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let on_query = Callback::new(move |q: String| state.update(|s| s.query = q));
    let tab = move || state.with(|s| s.tab);

    view! {
        <section class="page email-page">
            <div class="page__toolbar">
                <div class="tabs">
                    {EmailTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab() == t
                                    on:click=move |_| state.update(|s| s.select_tab(t))
                                >
                                    {t.label()}
                                    <Show when=move || t == EmailTab::Inbox && state.with(|s| s.unread_count() > 0)>
                                        <span class="tabs__count">{move || state.with(EmailState::unread_count)}</span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <span class="page__spacer"></span>
                <SearchBox query=query on_change=on_query placeholder="Search email..."/>
                <button class="btn btn--primary" on:click=move |_| state.update(|s| s.open_dialog(EmailDialog::Compose))>
                    "Compose"
                </button>
            </div>

            {move || match tab() {
                EmailTab::Inbox | EmailTab::Sent => view! { <MailPanel state=state/> }.into_any(),
                EmailTab::Campaigns => view! { <CampaignPanel state=state/> }.into_any(),
                EmailTab::Templates => view! { <TemplatePanel state=state/> }.into_any(),
                EmailTab::Analytics => view! { <AnalyticsPanel state=state/> }.into_any(),
            }}

            {move || {
                dialog
                    .get()
                    .map(|d| match d {
                        EmailDialog::Compose => view! { <ComposeDialog state=state/> }.into_any(),
                        EmailDialog::Campaign(kind) => view! { <CampaignDialog state=state kind=kind/> }.into_any(),
                        EmailDialog::Template => view! { <TemplateDialog state=state/> }.into_any(),
                    })
            }}
        </section>
    }
}

// =============================================================
// Mail
// =============================================================

#[component]
fn MailPanel(state: RwSignal<EmailState>) -> impl IntoView {
    view! {
        <div class="panel">
            <div class="chip-row">
                {InboxFilter::ALL
                    .into_iter()
                    .map(|f| {
                        view! {
                            <button
                                class="chip chip--button"
                                class:chip--active=move || state.with(|s| s.inbox_filter == f)
                                on:click=move |_| state.update(|s| s.set_inbox_filter(f))
                            >
                                {f.label()}
                                " ("
                                {move || state.with(|s| s.filter_count(f))}
                                ")"
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <MailList state=state/>
        </div>
        <MailDetail state=state/>
    }
}

#[component]
fn MailList(state: RwSignal<EmailState>) -> impl IntoView {
    move || {
        let emails: Vec<_> = state.with(|s| s.visible_emails().into_iter().cloned().collect());
        if emails.is_empty() {
            return view! { <p class="panel__empty">"No messages."</p> }.into_any();
        }
        view! {
            <ul class="mail-list">
                {emails
                    .into_iter()
                    .map(|email| {
                        let id = email.id;
                        view! {
                            <li
                                class="mail-list__item"
                                class:mail-list__item--unread={!email.read}
                                class:mail-list__item--selected=move || state.with(|s| s.selected == Some(id))
                                on:click=move |_| state.update(|s| s.open_email(id))
                            >
                                <button
                                    class="mail-list__star"
                                    class:mail-list__star--on=email.starred
                                    title="Star"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        state.update(|s| s.toggle_star(id));
                                    }
                                >
                                    {if email.starred { "★" } else { "☆" }}
                                </button>
                                <span class="mail-list__from">{email.from}</span>
                                <span class="mail-list__body">
                                    <span class="mail-list__subject">{email.subject}</span>
                                    <span class="mail-list__preview">{email.preview}</span>
                                </span>
                                <span class="mail-list__date">{email.date}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    }
}

#[component]
fn MailDetail(state: RwSignal<EmailState>) -> impl IntoView {
    move || {
        state
            .with(|s| s.selected_email().cloned())
            .map(|email| {
                view! {
                    <article class="panel mail-detail">
                        <div class="mail-detail__header">
                            <h3 class="panel__title">{email.subject}</h3>
                            <button
                                class="dialog__close"
                                title="Close"
                                aria-label="Close"
                                on:click=move |_| state.update(EmailState::close_email)
                            >
                                "✕"
                            </button>
                        </div>
                        <p class="mail-detail__meta">
                            <span>"From: " {email.from}</span>
                            <span>"To: " {email.to}</span>
                            <span class="page__spacer"></span>
                            <span>{email.date}</span>
                        </p>
                        <p class="mail-detail__body">{email.body}</p>
                    </article>
                }
            })
    }
}

// =============================================================
// Campaigns
// =============================================================

#[component]
fn CampaignPanel(state: RwSignal<EmailState>) -> impl IntoView {
    let rows = move || {
        state
            .with(|s| s.visible_campaigns().into_iter().cloned().collect::<Vec<_>>())
            .into_iter()
            .map(|c| {
                let opens = count_with_rate(c.opens, c.open_rate_tenths());
                let clicks = count_with_rate(c.clicks, c.click_rate_tenths());
                view! {
                    <tr>
                        <td>
                            <span class="table__primary">{c.name}</span>
                            <span class="table__secondary">{c.kind.label()}</span>
                        </td>
                        <td>
                            <Badge label=c.status.label() tone=campaign_tone(c.status)/>
                        </td>
                        <td>{format_count(c.recipients.into())}</td>
                        <td>{format_count(c.sent.into())}</td>
                        <td>{opens}</td>
                        <td>{clicks}</td>
                        <td>{c.schedule.unwrap_or_else(|| "-".to_owned())}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="card-grid">
            {CampaignKind::ALL
                .into_iter()
                .map(|kind| {
                    let (title, blurb) = launcher_copy(kind);
                    view! {
                        <button
                            class="card card--launcher"
                            on:click=move |_| state.update(|s| s.open_dialog(EmailDialog::Campaign(kind)))
                        >
                            <span class="card__title">{title}</span>
                            <span class="card__meta">{blurb}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
        <div class="panel">
            <h3 class="panel__title">"Campaigns"</h3>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Campaign"</th>
                        <th>"Status"</th>
                        <th>"Recipients"</th>
                        <th>"Sent"</th>
                        <th>"Opens"</th>
                        <th>"Clicks"</th>
                        <th>"Schedule"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn CampaignDialog(state: RwSignal<EmailState>, kind: CampaignKind) -> impl IntoView {
    let draft = RwSignal::new(CampaignDraft::default());
    let on_close = Callback::new(move |()| state.update(EmailState::close_dialog));
    let submit = move |action: CampaignAction| {
        let current = draft.get_untracked();
        if state.try_update(|s| s.create_campaign(kind, &current, action)).flatten().is_none() {
            log::debug!("{} campaign draft incomplete", kind.label());
        }
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(kind.primary_action());
    };
    let templates: Vec<(u32, String)> =
        state.with_untracked(|s| s.templates_of(kind).into_iter().map(|t| (t.id, t.name.clone())).collect());
    let on_template = move |ev: leptos::ev::Event| {
        let Ok(id) = event_target_value(&ev).parse::<u32>() else {
            return;
        };
        if let Some(template) = state.with_untracked(|s| s.templates.get(id).cloned()) {
            draft.update(|d| d.apply_template(&template));
        }
    };

    view! {
        <Dialog title=dialog_title(kind) on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <TextField
                    label="Campaign Name"
                    required=true
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.name = v))
                />
                {(kind == CampaignKind::FollowUp)
                    .then(|| {
                        view! {
                            <SelectField
                                label="Trigger"
                                options=TRIGGERS.to_vec()
                                value=Signal::derive(move || draft.with(|d| d.trigger.clone()))
                                on_change=Callback::new(move |v: String| draft.update(|d| d.trigger = v))
                            />
                            <TextField
                                label="Delay (days)"
                                input_type="number"
                                value=Signal::derive(move || draft.with(|d| d.delay_days.clone()))
                                on_input=Callback::new(move |v: String| draft.update(|d| d.delay_days = v))
                            />
                        }
                    })}
                {matches!(kind, CampaignKind::Promotional | CampaignKind::Newsletter)
                    .then(|| {
                        let options = AUDIENCES.iter().map(|(id, label, _)| (*id, *label)).collect::<Vec<_>>();
                        view! {
                            <SelectField
                                label="Recipients"
                                options=options
                                value=Signal::derive(move || draft.with(|d| d.audience.clone()))
                                on_change=Callback::new(move |v: String| draft.update(|d| d.audience = v))
                            />
                        }
                    })}
                {(kind == CampaignKind::Promotional)
                    .then(|| {
                        view! {
                            <div class="login-form__row">
                                <TextField
                                    label="Send Date"
                                    input_type="date"
                                    value=Signal::derive(move || draft.with(|d| d.send_date.clone()))
                                    on_input=Callback::new(move |v: String| draft.update(|d| d.send_date = v))
                                />
                                <TextField
                                    label="Send Time"
                                    input_type="time"
                                    value=Signal::derive(move || draft.with(|d| d.send_time.clone()))
                                    on_input=Callback::new(move |v: String| draft.update(|d| d.send_time = v))
                                />
                            </div>
                        }
                    })}
                {(kind == CampaignKind::Newsletter)
                    .then(|| {
                        view! {
                            <SelectField
                                label="Frequency"
                                options=FREQUENCIES.to_vec()
                                value=Signal::derive(move || draft.with(|d| d.frequency.clone()))
                                on_change=Callback::new(move |v: String| draft.update(|d| d.frequency = v))
                            />
                        }
                    })}
                {(kind == CampaignKind::Custom)
                    .then(|| {
                        view! {
                            <TextField
                                label="Recipients"
                                input_type="number"
                                placeholder="0"
                                value=Signal::derive(move || draft.with(|d| d.recipients.clone()))
                                on_input=Callback::new(move |v: String| draft.update(|d| d.recipients = v))
                            />
                        }
                    })}
                {(!templates.is_empty())
                    .then(|| {
                        view! {
                            <label class="dialog__label">
                                "Template"
                                <select class="dialog__input" on:change=on_template>
                                    <option value="">"Choose a template"</option>
                                    {templates
                                        .into_iter()
                                        .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                        }
                    })}
                <TextField
                    label="Subject Line"
                    value=Signal::derive(move || draft.with(|d| d.subject.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.subject = v))
                />
                <label class="dialog__label">
                    "Email Content"
                    <textarea
                        class="dialog__input dialog__textarea"
                        rows="6"
                        placeholder="Hi {{name}}, ..."
                        prop:value=move || draft.with(|d| d.body.clone())
                        on:input=move |ev| draft.update(|d| d.body = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    {matches!(kind, CampaignKind::Promotional | CampaignKind::Newsletter)
                        .then(|| {
                            view! {
                                <button type="button" class="btn" on:click=move |_| submit(CampaignAction::SaveDraft)>
                                    "Save Draft"
                                </button>
                            }
                        })}
                    <button type="submit" class="btn btn--primary">
                        {primary_label(kind)}
                    </button>
                </div>
            </form>
        </Dialog>
    }
}

// =============================================================
// Templates
// =============================================================

#[component]
fn TemplatePanel(state: RwSignal<EmailState>) -> impl IntoView {
    view! {
        <div class="page__toolbar">
            <h3 class="panel__title">"Email Templates"</h3>
            <span class="page__spacer"></span>
            <button class="btn btn--primary" on:click=move |_| state.update(|s| s.open_dialog(EmailDialog::Template))>
                "+ Create Template"
            </button>
        </div>
        <div class="card-grid">
            {move || {
                state
                    .with(|s| s.visible_templates().into_iter().cloned().collect::<Vec<_>>())
                    .into_iter()
                    .map(|t| {
                        view! {
                            <div class="card">
                                <span class="card__title">{t.name}</span>
                                <span class="chip">{t.kind.label()}</span>
                                <span class="card__meta">"Subject: " {t.subject}</span>
                                <span class="card__meta">{t.preview}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn TemplateDialog(state: RwSignal<EmailState>) -> impl IntoView {
    let draft = RwSignal::new(TemplateDraft::default());
    let on_close = Callback::new(move |()| state.update(EmailState::close_dialog));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if state.try_update(|s| s.create_template(&current)).flatten().is_none() {
            log::debug!("template draft incomplete");
        }
    };

    view! {
        <Dialog title="Create Email Template" on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <TextField
                    label="Template Name"
                    required=true
                    placeholder="e.g., Welcome Email"
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.name = v))
                />
                <SelectField
                    label="Template Type"
                    options=CampaignKind::options()
                    value=Signal::derive(move || draft.with(|d| d.kind.id().to_owned()))
                    on_change=Callback::new(move |v: String| {
                        draft.update(|d| d.kind = CampaignKind::from_id(&v).unwrap_or_default());
                    })
                />
                <TextField
                    label="Subject Line"
                    required=true
                    value=Signal::derive(move || draft.with(|d| d.subject.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.subject = v))
                />
                <label class="dialog__label">
                    "Template Content"
                    <textarea
                        class="dialog__input dialog__textarea"
                        rows="6"
                        placeholder="Use {{name}}, {{company}}, etc. for personalization..."
                        prop:value=move || draft.with(|d| d.body.clone())
                        on:input=move |ev| draft.update(|d| d.body = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "Save Template"
                    </button>
                </div>
            </form>
        </Dialog>
    }
}

// =============================================================
// Analytics
// =============================================================

#[component]
fn AnalyticsPanel(state: RwSignal<EmailState>) -> impl IntoView {
    let totals = Memo::new(move |_| state.with(EmailState::analytics));

    view! {
        <div class="stat-grid">
            {move || {
                let t = totals.get();
                view! {
                    <StatCard label="Total Sent" value=format_count(t.sent)/>
                    <StatCard label="Open Rate" value=format_rate_tenths(t.open_rate_tenths())/>
                    <StatCard label="Click Rate" value=format_rate_tenths(t.click_rate_tenths())/>
                    <StatCard label="Campaigns Sent" value=t.campaigns.to_string()/>
                }
            }}
        </div>
        <div class="panel">
            <h3 class="panel__title">"Campaign Performance"</h3>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Campaign"</th>
                        <th>"Sent"</th>
                        <th>"Delivered"</th>
                        <th>"Opens"</th>
                        <th>"Clicks"</th>
                        <th>"CTR"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .with(|s| s.sent_campaigns().into_iter().cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|c| {
                                let opens = count_with_rate(c.opens, c.open_rate_tenths());
                                let clicks = count_with_rate(c.clicks, c.click_rate_tenths());
                                view! {
                                    <tr>
                                        <td>
                                            <span class="table__primary">{c.name.clone()}</span>
                                            <span class="table__secondary">{c.kind.label()}</span>
                                        </td>
                                        <td>{format_count(c.sent.into())}</td>
                                        <td>{format_count(c.delivered())}</td>
                                        <td>{opens}</td>
                                        <td>{clicks}</td>
                                        <td>{format_rate_tenths(Some(c.click_through_tenths()))}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

// =============================================================
// Compose
// =============================================================

#[component]
fn ComposeDialog(state: RwSignal<EmailState>) -> impl IntoView {
    let draft = RwSignal::new(ComposeDraft::default());
    let on_close = Callback::new(move |()| state.update(EmailState::close_dialog));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if state.try_update(|s| s.send_email(&current)).flatten().is_none() {
            log::debug!("compose draft incomplete");
        }
    };

    view! {
        <Dialog title="Compose Email" on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <TextField
                    label="To"
                    input_type="email"
                    required=true
                    placeholder="recipient@example.com"
                    value=Signal::derive(move || draft.with(|d| d.to.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.to = v))
                />
                <TextField
                    label="Subject"
                    required=true
                    value=Signal::derive(move || draft.with(|d| d.subject.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.subject = v))
                />
                <label class="dialog__label">
                    "Message"
                    <textarea
                        class="dialog__input dialog__textarea"
                        rows="6"
                        prop:value=move || draft.with(|d| d.body.clone())
                        on:input=move |ev| draft.update(|d| d.body = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Discard"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "Send"
                    </button>
                </div>
            </form>
        </Dialog>
    }
}
