use super::*;

fn compose(to: &str, subject: &str, body: &str) -> ComposeDraft {
    ComposeDraft { to: to.to_owned(), subject: subject.to_owned(), body: body.to_owned() }
}

fn named(name: &str) -> CampaignDraft {
    CampaignDraft { name: name.to_owned(), ..CampaignDraft::default() }
}

fn with_dialog(dialog: EmailDialog) -> EmailState {
    EmailState { dialog: Some(dialog), ..EmailState::default() }
}

// =============================================================
// Tabs + folders
// =============================================================

#[test]
fn default_tab_is_inbox_with_inbox_mail_only() {
    let state = EmailState::default();
    assert_eq!(state.tab, EmailTab::Inbox);
    assert_eq!(state.inbox_filter, InboxFilter::All);
    let visible = state.visible_emails();
    assert_eq!(visible.len(), 4);
    assert!(visible.iter().all(|e| e.folder == Folder::Inbox));
}

#[test]
fn sent_tab_shows_sent_folder() {
    let mut state = EmailState::default();
    state.select_tab(EmailTab::Sent);
    let ids: Vec<u32> = state.visible_emails().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![5]);
}

#[test]
fn non_mail_tabs_show_no_mail() {
    let mut state = EmailState::default();
    for tab in [EmailTab::Campaigns, EmailTab::Templates, EmailTab::Analytics] {
        state.select_tab(tab);
        assert!(state.visible_emails().is_empty());
        assert_eq!(state.filter_count(InboxFilter::All), 0);
    }
}

#[test]
fn tab_strip_order() {
    let labels: Vec<_> = EmailTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Inbox", "Sent", "Campaigns", "Templates", "Analytics"]);
}

#[test]
fn search_filters_within_current_folder() {
    let state = EmailState { query: "contract".to_owned(), ..EmailState::default() };
    let hits = state.visible_emails();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].from, "Michael Chen");
}

#[test]
fn search_matches_sent_mail_by_recipient() {
    let mut state = EmailState { query: "nexus".to_owned(), ..EmailState::default() };
    assert!(state.visible_emails().is_empty());
    state.select_tab(EmailTab::Sent);
    assert_eq!(state.visible_emails().len(), 1);
}

#[test]
fn search_applies_to_campaigns_and_templates() {
    let state = EmailState { query: "launch".to_owned(), ..EmailState::default() };
    assert_eq!(state.visible_campaigns().len(), 1);

    let state = EmailState { query: "invoice".to_owned(), ..EmailState::default() };
    assert_eq!(state.visible_templates()[0].name, "Payment Reminder");
}

#[test]
fn search_matches_campaign_kind() {
    let state = EmailState { query: "follow-up".to_owned(), ..EmailState::default() };
    let names: Vec<_> = state.visible_campaigns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Welcome New Customers"]);
}

// =============================================================
// Inbox sub-filters
// =============================================================

#[test]
fn unread_filter_hides_read_mail() {
    let mut state = EmailState::default();
    state.set_inbox_filter(InboxFilter::Unread);
    let ids: Vec<u32> = state.visible_emails().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn starred_filter_tracks_toggle() {
    let mut state = EmailState::default();
    state.set_inbox_filter(InboxFilter::Starred);
    assert_eq!(state.visible_emails().len(), 1);
    state.toggle_star(3);
    assert_eq!(state.visible_emails().len(), 2);
}

#[test]
fn filter_counts_ignore_query() {
    let mut state = EmailState { query: "contract".to_owned(), ..EmailState::default() };
    assert_eq!(state.filter_count(InboxFilter::All), 4);
    assert_eq!(state.filter_count(InboxFilter::Unread), 2);
    assert_eq!(state.filter_count(InboxFilter::Starred), 1);

    state.set_inbox_filter(InboxFilter::Unread);
    assert_eq!(state.visible_emails().len(), 1);
}

#[test]
fn sub_filter_applies_to_sent_folder() {
    let mut state = EmailState::default();
    state.select_tab(EmailTab::Sent);
    state.set_inbox_filter(InboxFilter::Unread);
    assert!(state.visible_emails().is_empty());
}

// =============================================================
// Flags + detail view
// =============================================================

#[test]
fn unread_count_tracks_mark_read() {
    let mut state = EmailState::default();
    assert_eq!(state.unread_count(), 2);
    state.mark_read(1);
    assert_eq!(state.unread_count(), 1);
    state.mark_read(1);
    assert_eq!(state.unread_count(), 1);
}

#[test]
fn toggle_star_flips_flag() {
    let mut state = EmailState::default();
    state.toggle_star(2);
    assert_eq!(state.emails.get(2).map(|e| e.starred), Some(true));
    state.toggle_star(2);
    assert_eq!(state.emails.get(2).map(|e| e.starred), Some(false));
}

#[test]
fn flag_changes_on_unknown_id_are_ignored() {
    let mut state = EmailState::default();
    state.toggle_star(99);
    state.mark_read(99);
    state.open_email(99);
    assert_eq!(state.emails.len(), 5);
    assert_eq!(state.selected, None);
}

#[test]
fn open_email_selects_and_marks_read() {
    let mut state = EmailState::default();
    state.open_email(2);

    let shown = state.selected_email().unwrap();
    assert_eq!(shown.subject, "Contract renewal");
    assert!(shown.body.starts_with("Our current agreement"));
    assert!(shown.read);
    assert_eq!(state.unread_count(), 1);
}

#[test]
fn close_email_and_tab_switch_clear_selection() {
    let mut state = EmailState::default();
    state.open_email(1);
    state.close_email();
    assert!(state.selected_email().is_none());

    state.open_email(1);
    state.select_tab(EmailTab::Sent);
    assert!(state.selected_email().is_none());
}

#[test]
fn seeded_previews_are_cut_from_body() {
    let state = EmailState::default();
    let first = state.emails.get(1).unwrap();
    assert!(first.preview.ends_with('…'));
    assert!(first.preview.chars().count() <= PREVIEW_CHARS + 1);
}

// =============================================================
// Compose
// =============================================================

#[test]
fn send_email_appends_to_sent_folder() {
    let mut state = with_dialog(EmailDialog::Compose);
    let id = state.send_email(&compose("lisa.t@brightpath.co", "Hello", "Quick note")).unwrap();

    assert_eq!(id, 6);
    assert_eq!(state.dialog, None);
    let sent = state.emails.get(id).unwrap();
    assert_eq!(sent.folder, Folder::Sent);
    assert_eq!(sent.from, "You");
    assert_eq!(sent.preview, "Quick note");
    assert_eq!(sent.body, "Quick note");
    assert!(sent.read);

    state.select_tab(EmailTab::Sent);
    assert_eq!(state.visible_emails().last().map(|e| e.id), Some(id));
}

#[test]
fn send_email_does_not_touch_inbox_counts() {
    let mut state = EmailState::default();
    state.send_email(&compose("a@b.co", "Hi", "")).unwrap();
    assert_eq!(state.visible_emails().len(), 4);
    assert_eq!(state.unread_count(), 2);
}

#[test]
fn send_email_requires_recipient_and_subject() {
    let mut state = with_dialog(EmailDialog::Compose);
    assert_eq!(state.send_email(&compose("", "Hi", "body")), None);
    assert_eq!(state.send_email(&compose("a@b.co", "  ", "body")), None);
    assert_eq!(state.dialog, Some(EmailDialog::Compose));
    assert_eq!(state.emails.len(), 5);
}

// =============================================================
// Campaigns
// =============================================================

#[test]
fn custom_campaign_saves_draft_with_typed_recipients() {
    let mut state = with_dialog(EmailDialog::Campaign(CampaignKind::Custom));
    let draft = CampaignDraft { subject: "Cold deals".to_owned(), recipients: "1,500".to_owned(), ..named("Winter Sale") };
    let id = state.create_campaign(CampaignKind::Custom, &draft, CampaignAction::SaveDraft).unwrap();

    let campaign = state.campaigns.items().last().unwrap();
    assert_eq!(campaign.id, id);
    assert_eq!(campaign.kind, CampaignKind::Custom);
    assert_eq!(campaign.status, CampaignStatus::Draft);
    assert_eq!(campaign.recipients, 1500);
    assert_eq!(campaign.sent, 0);
    assert_eq!(campaign.open_rate_tenths(), None);
    assert_eq!(state.dialog, None);
}

#[test]
fn custom_campaign_with_garbage_recipients_uses_zero() {
    let mut state = EmailState::default();
    let draft = CampaignDraft { recipients: "lots".to_owned(), ..named("X") };
    let id = state.create_campaign(CampaignKind::Custom, &draft, CampaignAction::SaveDraft).unwrap();
    assert_eq!(state.campaigns.get(id).map(|c| c.recipients), Some(0));
}

#[test]
fn every_campaign_requires_name() {
    let mut state = with_dialog(EmailDialog::Campaign(CampaignKind::Promotional));
    for kind in CampaignKind::ALL {
        assert_eq!(state.create_campaign(kind, &CampaignDraft::default(), kind.primary_action()), None);
    }
    assert_eq!(state.dialog, Some(EmailDialog::Campaign(CampaignKind::Promotional)));
    assert_eq!(state.campaigns.len(), 4);
}

#[test]
fn follow_up_is_scheduled_on_its_trigger() {
    let mut state = EmailState::default();
    let draft = CampaignDraft { trigger: "purchase".to_owned(), delay_days: "3".to_owned(), ..named("Thanks for buying") };
    let id = state.create_campaign(CampaignKind::FollowUp, &draft, CampaignAction::Schedule).unwrap();

    let campaign = state.campaigns.get(id).unwrap();
    assert_eq!(campaign.status, CampaignStatus::Scheduled);
    assert_eq!(campaign.schedule.as_deref(), Some("After first purchase, +3 days"));
    assert_eq!(campaign.recipients, 0);
}

#[test]
fn follow_up_with_unknown_trigger_is_refused() {
    let mut state = EmailState::default();
    let draft = CampaignDraft { trigger: "whenever".to_owned(), ..named("X") };
    assert_eq!(state.create_campaign(CampaignKind::FollowUp, &draft, CampaignAction::Schedule), None);
}

#[test]
fn promotional_schedule_needs_a_date() {
    let mut state = EmailState::default();
    let undated = CampaignDraft { audience: "premium".to_owned(), ..named("VIP week") };
    assert_eq!(state.create_campaign(CampaignKind::Promotional, &undated, CampaignAction::Schedule), None);

    let dated = CampaignDraft { send_date: "2024-11-29".to_owned(), ..undated };
    let id = state.create_campaign(CampaignKind::Promotional, &dated, CampaignAction::Schedule).unwrap();
    let campaign = state.campaigns.get(id).unwrap();
    assert_eq!(campaign.schedule.as_deref(), Some("2024-11-29 at 09:00"));
    assert_eq!(campaign.recipients, 450);
}

#[test]
fn promotional_can_be_saved_as_draft_without_date() {
    let mut state = EmailState::default();
    let id = state.create_campaign(CampaignKind::Promotional, &named("Later"), CampaignAction::SaveDraft).unwrap();
    assert_eq!(state.campaigns.get(id).map(|c| c.status), Some(CampaignStatus::Draft));
}

#[test]
fn newsletter_send_now_counts_whole_audience_as_sent() {
    let mut state = EmailState::default();
    let draft = CampaignDraft { subject: "June digest".to_owned(), audience: "active".to_owned(), frequency: "monthly".to_owned(), ..named("Digest") };
    let id = state.create_campaign(CampaignKind::Newsletter, &draft, CampaignAction::SendNow).unwrap();

    let campaign = state.campaigns.get(id).unwrap();
    assert_eq!(campaign.status, CampaignStatus::Sent);
    assert_eq!(campaign.sent, 1200);
    assert_eq!(campaign.opens, 0);
    assert_eq!(campaign.schedule.as_deref(), Some("Repeats monthly"));
    assert_eq!(state.analytics().campaigns, 3);
}

#[test]
fn send_now_needs_subject_and_audience() {
    let mut state = EmailState::default();
    let no_subject = named("Digest");
    assert_eq!(state.create_campaign(CampaignKind::Newsletter, &no_subject, CampaignAction::SendNow), None);

    let no_audience = CampaignDraft { subject: "Hi".to_owned(), audience: "nobody".to_owned(), ..named("Digest") };
    assert_eq!(state.create_campaign(CampaignKind::Newsletter, &no_audience, CampaignAction::SendNow), None);
}

#[test]
fn primary_actions_match_dialog_buttons() {
    assert_eq!(CampaignKind::FollowUp.primary_action(), CampaignAction::Schedule);
    assert_eq!(CampaignKind::Promotional.primary_action(), CampaignAction::Schedule);
    assert_eq!(CampaignKind::Newsletter.primary_action(), CampaignAction::SendNow);
    assert_eq!(CampaignKind::Custom.primary_action(), CampaignAction::SaveDraft);
}

#[test]
fn apply_template_prefills_subject_and_body() {
    let state = EmailState::default();
    let mut draft = named("Onboarding");
    draft.apply_template(state.templates_of(CampaignKind::FollowUp)[1]);
    assert_eq!(draft.subject, "How are you enjoying CRM Pro?");
    assert!(draft.body.starts_with("We wanted to check in"));
}

// =============================================================
// Templates
// =============================================================

#[test]
fn create_template_appends_and_closes_dialog() {
    let mut state = with_dialog(EmailDialog::Template);
    let draft = TemplateDraft {
        name: " Renewal Nudge ".to_owned(),
        kind: CampaignKind::Promotional,
        subject: "Renew and save".to_owned(),
        body: "Hi {{name}}, your plan renews soon.".to_owned(),
    };
    let id = state.create_template(&draft).unwrap();

    let template = state.templates.items().last().unwrap();
    assert_eq!(template.id, id);
    assert_eq!(template.name, "Renewal Nudge");
    assert_eq!(template.kind, CampaignKind::Promotional);
    assert_eq!(template.preview, "Hi {{name}}, your plan renews soon.");
    assert_eq!(state.dialog, None);
    assert_eq!(state.templates_of(CampaignKind::Promotional).len(), 2);
}

#[test]
fn create_template_requires_name_and_subject() {
    let mut state = with_dialog(EmailDialog::Template);
    let draft = TemplateDraft { name: "Only name".to_owned(), ..TemplateDraft::default() };
    assert_eq!(state.create_template(&draft), None);
    let draft = TemplateDraft { subject: "Only subject".to_owned(), ..TemplateDraft::default() };
    assert_eq!(state.create_template(&draft), None);
    assert_eq!(state.dialog, Some(EmailDialog::Template));
    assert_eq!(state.templates.len(), 5);
}

#[test]
fn campaign_kind_ids_round_trip() {
    for kind in CampaignKind::ALL {
        assert_eq!(CampaignKind::from_id(kind.id()), Some(kind));
    }
    assert_eq!(CampaignKind::from_id("spam"), None);
    assert_eq!(CampaignKind::options().len(), 4);
}

// =============================================================
// Analytics
// =============================================================

#[test]
fn analytics_totals_cover_sent_campaigns_only() {
    let state = EmailState::default();
    let totals = state.analytics();
    assert_eq!(totals.campaigns, 2);
    assert_eq!(totals.sent, 1390);
    assert_eq!(totals.opens, 402);
    assert_eq!(totals.clicks, 132);
    assert_eq!(totals.open_rate_tenths(), Some(289));
    assert_eq!(totals.click_rate_tenths(), Some(95));
}

#[test]
fn per_campaign_rates_round_half_up() {
    let state = EmailState::default();
    let spring = state.campaigns.get(1).unwrap();
    assert_eq!(spring.open_rate_tenths(), Some(245));
    assert_eq!(spring.click_rate_tenths(), Some(70));
    assert_eq!(spring.click_through_tenths(), 286);
    assert_eq!(spring.delivered(), 1215);

    let welcome = state.campaigns.get(4).unwrap();
    assert_eq!(welcome.open_rate_tenths(), Some(653));
    assert_eq!(welcome.click_through_tenths(), 459);
}

#[test]
fn unsent_campaign_has_no_rates() {
    let state = EmailState::default();
    let launch = state.campaigns.get(2).unwrap();
    assert_eq!(launch.open_rate_tenths(), None);
    assert_eq!(launch.click_through_tenths(), 0);
    assert_eq!(launch.delivered(), 0);
}

#[test]
fn analytics_with_nothing_sent_is_empty() {
    let state = EmailState { campaigns: RecordList::default(), ..EmailState::default() };
    let totals = state.analytics();
    assert_eq!(totals, CampaignAnalytics::default());
    assert_eq!(totals.open_rate_tenths(), None);
    assert!(state.sent_campaigns().is_empty());
}

#[test]
fn rate_tenths_handles_extremes() {
    assert_eq!(rate_tenths(0, 0), None);
    assert_eq!(rate_tenths(1, 3), Some(333));
    assert_eq!(rate_tenths(2, 3), Some(667));
}
