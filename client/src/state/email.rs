//! Email page model: mail folders, campaigns, templates and analytics.
//!
//! DESIGN
//! ======
//! "Sending" appends to the local Sent folder and creating a campaign or a
//! template appends a record; nothing leaves the page. The one search box
//! applies to whichever tab is showing. At most one dialog is open at a time.
//!
//! Rates are carried as integer tenths of a percent: `245` is 24.5%.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use crate::state::list::{Record, RecordList};
use crate::util::format::excerpt;
use crate::util::validate::{is_blank, is_valid_email};

const PREVIEW_CHARS: usize = 80;

/// Share of sent mail reported as delivered, in percent.
const DELIVERY_PCT: u64 = 98;

/// `(id, label, size)` of the mailing segments offered to bulk campaigns.
pub const AUDIENCES: [(&str, &str, u32); 4] = [
    ("all", "All subscribers (2,500)", 2_500),
    ("active", "Active users (1,200)", 1_200),
    ("premium", "Premium customers (450)", 450),
    ("trial", "Trial users (350)", 350),
];

/// `(id, label)` of the events that start a follow-up sequence.
pub const TRIGGERS: [(&str, &str); 4] = [
    ("signup", "After customer signup"),
    ("purchase", "After first purchase"),
    ("days", "Days after signup"),
    ("inactive", "After period of inactivity"),
];

/// `(id, label)` of newsletter send frequencies.
pub const FREQUENCIES: [(&str, &str); 3] = [("once", "Send once"), ("weekly", "Weekly"), ("monthly", "Monthly")];

fn lookup<'a>(table: &'a [(&'a str, &'a str)], id: &str) -> Option<&'a str> {
    table.iter().find(|(key, _)| *key == id).map(|(_, label)| *label)
}

fn audience_size(id: &str) -> Option<u32> {
    AUDIENCES.iter().find(|(key, _, _)| *key == id).map(|(_, _, size)| *size)
}

/// `part / whole` in tenths of a percent, rounded half up. `None` when `whole` is zero.
pub fn rate_tenths(part: u64, whole: u64) -> Option<u64> {
    if whole == 0 {
        return None;
    }
    Some(part.saturating_mul(1000).saturating_add(whole / 2) / whole)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmailTab {
    #[default]
    Inbox,
    Sent,
    Campaigns,
    Templates,
    Analytics,
}

impl EmailTab {
    pub const ALL: [EmailTab; 5] = [Self::Inbox, Self::Sent, Self::Campaigns, Self::Templates, Self::Analytics];

    pub fn label(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Sent => "Sent",
            Self::Campaigns => "Campaigns",
            Self::Templates => "Templates",
            Self::Analytics => "Analytics",
        }
    }

    /// Mail folder shown by this tab, if it is a mail tab.
    pub fn folder(self) -> Option<Folder> {
        match self {
            Self::Inbox => Some(Folder::Inbox),
            Self::Sent => Some(Folder::Sent),
            Self::Campaigns | Self::Templates | Self::Analytics => None,
        }
    }
}

/// Sub-filter over the mail tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InboxFilter {
    #[default]
    All,
    Unread,
    Starred,
}

impl InboxFilter {
    pub const ALL: [InboxFilter; 3] = [Self::All, Self::Unread, Self::Starred];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unread => "Unread",
            Self::Starred => "Starred",
        }
    }

    pub fn matches(self, email: &Email) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !email.read,
            Self::Starred => email.starred,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Folder {
    Inbox,
    Sent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email {
    pub id: u32,
    pub from: String,
    pub to: String,
    pub subject: String,
    pub preview: String,
    pub body: String,
    pub date: String,
    pub folder: Folder,
    pub read: bool,
    pub starred: bool,
}

impl Record for Email {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.from.as_str(), self.to.as_str(), self.subject.as_str()]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CampaignKind {
    #[default]
    FollowUp,
    Promotional,
    Newsletter,
    Custom,
}

impl CampaignKind {
    pub const ALL: [CampaignKind; 4] = [Self::FollowUp, Self::Promotional, Self::Newsletter, Self::Custom];

    pub fn id(self) -> &'static str {
        match self {
            Self::FollowUp => "follow-up",
            Self::Promotional => "promotional",
            Self::Newsletter => "newsletter",
            Self::Custom => "custom",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FollowUp => "Follow-up",
            Self::Promotional => "Promotional",
            Self::Newsletter => "Newsletter",
            Self::Custom => "Custom",
        }
    }

    pub fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL.into_iter().map(|k| (k.id(), k.label())).collect()
    }

    /// What submitting the dialog with Enter does.
    pub fn primary_action(self) -> CampaignAction {
        match self {
            Self::FollowUp | Self::Promotional => CampaignAction::Schedule,
            Self::Newsletter => CampaignAction::SendNow,
            Self::Custom => CampaignAction::SaveDraft,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CampaignStatus {
    #[default]
    Draft,
    Scheduled,
    Sent,
}

impl CampaignStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Scheduled => "Scheduled",
            Self::Sent => "Sent",
        }
    }
}

/// How a campaign dialog was submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignAction {
    SaveDraft,
    Schedule,
    SendNow,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub kind: CampaignKind,
    pub subject: String,
    pub status: CampaignStatus,
    pub recipients: u32,
    pub sent: u32,
    pub opens: u32,
    pub clicks: u32,
    /// Send date, trigger or repeat rule, when there is one.
    pub schedule: Option<String>,
}

impl Campaign {
    pub fn open_rate_tenths(&self) -> Option<u64> {
        rate_tenths(self.opens.into(), self.sent.into())
    }

    pub fn click_rate_tenths(&self) -> Option<u64> {
        rate_tenths(self.clicks.into(), self.sent.into())
    }

    /// Clicks per open. Zero until someone opens.
    pub fn click_through_tenths(&self) -> u64 {
        rate_tenths(self.clicks.into(), self.opens.into()).unwrap_or(0)
    }

    pub fn delivered(&self) -> u64 {
        (u64::from(self.sent) * DELIVERY_PCT + 50) / 100
    }
}

impl Record for Campaign {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.subject.as_str(), self.kind.label()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pub id: u32,
    pub name: String,
    pub kind: CampaignKind,
    pub subject: String,
    pub preview: String,
}

impl Record for Template {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.subject.as_str(), self.kind.label()]
    }
}

/// Totals over every campaign that has gone out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CampaignAnalytics {
    pub campaigns: usize,
    pub sent: u64,
    pub opens: u64,
    pub clicks: u64,
}

impl CampaignAnalytics {
    pub fn open_rate_tenths(&self) -> Option<u64> {
        rate_tenths(self.opens, self.sent)
    }

    pub fn click_rate_tenths(&self) -> Option<u64> {
        rate_tenths(self.clicks, self.sent)
    }
}

/// Which dialog is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailDialog {
    Compose,
    Campaign(CampaignKind),
    Template,
}

/// Fields of the "Compose" dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ComposeDraft {
    pub fn is_complete(&self) -> bool {
        is_valid_email(&self.to) && !is_blank(&self.subject)
    }
}

/// Fields of the campaign dialogs. Each kind reads only the fields it shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignDraft {
    pub name: String,
    pub subject: String,
    pub body: String,
    /// Free-text recipient count for custom campaigns; blank or unparsable means zero.
    pub recipients: String,
    /// Key into [`AUDIENCES`].
    pub audience: String,
    /// Key into [`TRIGGERS`].
    pub trigger: String,
    pub delay_days: String,
    pub send_date: String,
    pub send_time: String,
    /// Key into [`FREQUENCIES`].
    pub frequency: String,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            subject: String::new(),
            body: String::new(),
            recipients: String::new(),
            audience: AUDIENCES[0].0.to_owned(),
            trigger: TRIGGERS[0].0.to_owned(),
            delay_days: "0".to_owned(),
            send_date: String::new(),
            send_time: "09:00".to_owned(),
            frequency: FREQUENCIES[0].0.to_owned(),
        }
    }
}

impl CampaignDraft {
    /// Prefill subject and content from a saved template.
    pub fn apply_template(&mut self, template: &Template) {
        self.subject.clone_from(&template.subject);
        self.body.clone_from(&template.preview);
    }

    fn recipient_count(&self, kind: CampaignKind) -> u32 {
        match kind {
            CampaignKind::Custom => self.recipients.trim().replace(',', "").parse::<u32>().unwrap_or(0),
            CampaignKind::Promotional | CampaignKind::Newsletter => audience_size(&self.audience).unwrap_or(0),
            CampaignKind::FollowUp => 0,
        }
    }

    /// Human-readable schedule for a scheduled campaign, if the draft has
    /// enough to build one.
    fn schedule(&self, kind: CampaignKind) -> Option<String> {
        if kind == CampaignKind::FollowUp {
            let trigger = lookup(&TRIGGERS, &self.trigger)?;
            let delay = self.delay_days.trim().parse::<u32>().unwrap_or(0);
            return Some(match delay {
                0 => trigger.to_owned(),
                1 => format!("{trigger}, +1 day"),
                n => format!("{trigger}, +{n} days"),
            });
        }
        if is_blank(&self.send_date) {
            return None;
        }
        let date = self.send_date.trim();
        Some(if is_blank(&self.send_time) { date.to_owned() } else { format!("{date} at {}", self.send_time.trim()) })
    }

    fn repeat_rule(&self) -> Option<String> {
        match self.frequency.as_str() {
            "weekly" | "monthly" => lookup(&FREQUENCIES, &self.frequency).map(|label| format!("Repeats {}", label.to_lowercase())),
            _ => None,
        }
    }
}

/// Fields of the "Create Email Template" dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateDraft {
    pub name: String,
    pub kind: CampaignKind,
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Debug)]
pub struct EmailState {
    pub emails: RecordList<Email>,
    pub campaigns: RecordList<Campaign>,
    pub templates: RecordList<Template>,
    pub tab: EmailTab,
    pub inbox_filter: InboxFilter,
    pub query: String,
    pub selected: Option<u32>,
    pub dialog: Option<EmailDialog>,
}

impl Default for EmailState {
    fn default() -> Self {
        Self {
            emails: RecordList::seeded(seed_emails()),
            campaigns: RecordList::seeded(seed_campaigns()),
            templates: RecordList::seeded(seed_templates()),
            tab: EmailTab::Inbox,
            inbox_filter: InboxFilter::All,
            query: String::new(),
            selected: None,
            dialog: None,
        }
    }
}

impl EmailState {
    /// Switch tabs. Closes any open message.
    pub fn select_tab(&mut self, tab: EmailTab) {
        self.tab = tab;
        self.selected = None;
    }

    pub fn set_inbox_filter(&mut self, filter: InboxFilter) {
        self.inbox_filter = filter;
    }

    /// Emails in the current tab's folder that pass the sub-filter and the query.
    ///
    /// Non-mail tabs show no mail.
    pub fn visible_emails(&self) -> Vec<&Email> {
        let Some(folder) = self.tab.folder() else {
            return Vec::new();
        };
        self.emails
            .filter(&self.query)
            .into_iter()
            .filter(|e| e.folder == folder && self.inbox_filter.matches(e))
            .collect()
    }

    /// Size of each sub-filter within the current folder, ignoring the query.
    pub fn filter_count(&self, filter: InboxFilter) -> usize {
        let Some(folder) = self.tab.folder() else {
            return 0;
        };
        self.emails.count_where(|e| e.folder == folder && filter.matches(e))
    }

    pub fn visible_campaigns(&self) -> Vec<&Campaign> {
        self.campaigns.filter(&self.query)
    }

    pub fn visible_templates(&self) -> Vec<&Template> {
        self.templates.filter(&self.query)
    }

    pub fn templates_of(&self, kind: CampaignKind) -> Vec<&Template> {
        self.templates.items().iter().filter(|t| t.kind == kind).collect()
    }

    pub fn unread_count(&self) -> usize {
        self.emails.count_where(|e| e.folder == Folder::Inbox && !e.read)
    }

    pub fn toggle_star(&mut self, id: u32) {
        if let Some(email) = self.emails.get_mut(id) {
            email.starred = !email.starred;
        }
    }

    pub fn mark_read(&mut self, id: u32) {
        if let Some(email) = self.emails.get_mut(id) {
            email.read = true;
        }
    }

    /// Show a message in the detail pane and mark it read.
    pub fn open_email(&mut self, id: u32) {
        if self.emails.get(id).is_none() {
            return;
        }
        self.mark_read(id);
        self.selected = Some(id);
    }

    pub fn close_email(&mut self) {
        self.selected = None;
    }

    pub fn selected_email(&self) -> Option<&Email> {
        self.selected.and_then(|id| self.emails.get(id))
    }

    pub fn open_dialog(&mut self, dialog: EmailDialog) {
        self.dialog = Some(dialog);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Append the composed message to Sent and close the dialog.
    pub fn send_email(&mut self, draft: &ComposeDraft) -> Option<u32> {
        if !draft.is_complete() {
            return None;
        }
        let id = self.emails.push_with(|id| Email {
            id,
            from: "You".to_owned(),
            to: draft.to.trim().to_owned(),
            subject: draft.subject.trim().to_owned(),
            preview: excerpt(&draft.body, PREVIEW_CHARS),
            body: draft.body.trim().to_owned(),
            date: "Just now".to_owned(),
            folder: Folder::Sent,
            read: true,
            starred: false,
        });
        log::debug!("email {id} sent to {}", draft.to.trim());
        self.dialog = None;
        Some(id)
    }

    /// Append a campaign of `kind` and close the dialog.
    ///
    /// Every action needs a name. Scheduling needs a trigger (follow-up) or
    /// a send date (everything else). Sending now needs a subject and at
    /// least one recipient; the whole audience counts as sent.
    pub fn create_campaign(&mut self, kind: CampaignKind, draft: &CampaignDraft, action: CampaignAction) -> Option<u32> {
        if is_blank(&draft.name) {
            return None;
        }
        let recipients = draft.recipient_count(kind);
        let (status, sent, schedule) = match action {
            CampaignAction::SaveDraft => (CampaignStatus::Draft, 0, None),
            CampaignAction::Schedule => (CampaignStatus::Scheduled, 0, Some(draft.schedule(kind)?)),
            CampaignAction::SendNow => {
                if recipients == 0 || is_blank(&draft.subject) {
                    return None;
                }
                (CampaignStatus::Sent, recipients, draft.repeat_rule())
            }
        };
        let id = self.campaigns.push_with(|id| Campaign {
            id,
            name: draft.name.trim().to_owned(),
            kind,
            subject: draft.subject.trim().to_owned(),
            status,
            recipients,
            sent,
            opens: 0,
            clicks: 0,
            schedule,
        });
        log::debug!("{} campaign {id} saved as {}", kind.label(), status.label());
        self.dialog = None;
        Some(id)
    }

    /// Append a template and close the dialog. Needs a name and a subject.
    pub fn create_template(&mut self, draft: &TemplateDraft) -> Option<u32> {
        if is_blank(&draft.name) || is_blank(&draft.subject) {
            return None;
        }
        let id = self.templates.push_with(|id| Template {
            id,
            name: draft.name.trim().to_owned(),
            kind: draft.kind,
            subject: draft.subject.trim().to_owned(),
            preview: excerpt(&draft.body, PREVIEW_CHARS),
        });
        log::debug!("template {id} created");
        self.dialog = None;
        Some(id)
    }

    /// Campaigns that have gone out, in list order.
    pub fn sent_campaigns(&self) -> Vec<&Campaign> {
        self.campaigns.items().iter().filter(|c| c.status == CampaignStatus::Sent).collect()
    }

    pub fn analytics(&self) -> CampaignAnalytics {
        self.sent_campaigns().into_iter().fold(CampaignAnalytics::default(), |mut acc, c| {
            acc.campaigns += 1;
            acc.sent = acc.sent.saturating_add(c.sent.into());
            acc.opens = acc.opens.saturating_add(c.opens.into());
            acc.clicks = acc.clicks.saturating_add(c.clicks.into());
            acc
        })
    }
}

struct SeedEmail {
    id: u32,
    from: &'static str,
    subject: &'static str,
    body: &'static str,
    date: &'static str,
    folder: Folder,
    read: bool,
    starred: bool,
}

impl SeedEmail {
    fn build(self) -> Email {
        let (from, to) = match self.folder {
            Folder::Inbox => (self.from.to_owned(), "me@crmpro.com".to_owned()),
            Folder::Sent => ("You".to_owned(), self.from.to_owned()),
        };
        Email {
            id: self.id,
            from,
            to,
            subject: self.subject.to_owned(),
            preview: excerpt(self.body, PREVIEW_CHARS),
            body: self.body.to_owned(),
            date: self.date.to_owned(),
            folder: self.folder,
            read: self.read,
            starred: self.starred,
        }
    }
}

fn seed_emails() -> Vec<Email> {
    use Folder::{Inbox, Sent};
    [
        SeedEmail { id: 1, from: "Sarah Johnson", subject: "Re: Q3 proposal review", body: "Thanks for sending this over. I've shared it with the team and we'd like to set up a call next week to walk through the pricing section together.", date: "10:24 AM", folder: Inbox, read: false, starred: true },
        SeedEmail { id: 2, from: "Michael Chen", subject: "Contract renewal", body: "Our current agreement ends next month. Could you send the updated terms so legal can review them before our Thursday check-in?", date: "9:12 AM", folder: Inbox, read: false, starred: false },
        SeedEmail { id: 3, from: "Emily Rodriguez", subject: "Demo follow-up", body: "Great demo yesterday! A few questions came up about the reporting module, mainly around exporting dashboards to PDF.", date: "Yesterday", folder: Inbox, read: true, starred: false },
        SeedEmail { id: 4, from: "Lisa Thompson", subject: "Invoice INV-0002", body: "Payment has been processed. Please confirm receipt when you get a chance.", date: "Mon", folder: Inbox, read: true, starred: false },
        SeedEmail { id: 5, from: "david@nexusventures.com", subject: "Checking in", body: "Hi David, just wanted to see whether you had a chance to review the pricing we discussed last week.", date: "Sun", folder: Sent, read: true, starred: false },
    ]
    .into_iter()
    .map(SeedEmail::build)
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn campaign(id: u32, name: &str, kind: CampaignKind, subject: &str, status: CampaignStatus, recipients: u32, opens: u32, clicks: u32, schedule: Option<&str>) -> Campaign {
    let sent = if status == CampaignStatus::Sent { recipients } else { 0 };
    Campaign {
        id,
        name: name.to_owned(),
        kind,
        subject: subject.to_owned(),
        status,
        recipients,
        sent,
        opens,
        clicks,
        schedule: schedule.map(str::to_owned),
    }
}

fn seed_campaigns() -> Vec<Campaign> {
    use CampaignKind::{FollowUp, Newsletter, Promotional};
    use CampaignStatus::{Draft, Scheduled, Sent};
    vec![
        campaign(1, "Spring Promotion", Promotional, "Save 20% this spring", Sent, 1240, 304, 87, None),
        campaign(2, "Product Launch", Promotional, "Meet our new analytics suite", Scheduled, 3200, 0, 0, Some("Jul 1, 2024 at 09:00")),
        campaign(3, "Customer Newsletter", Newsletter, "What's new in June", Draft, 0, 0, 0, None),
        campaign(4, "Welcome New Customers", FollowUp, "Welcome to CRM Pro!", Sent, 150, 98, 45, Some("After customer signup")),
    ]
}

fn template(id: u32, name: &str, kind: CampaignKind, subject: &str, preview: &str) -> Template {
    Template { id, name: name.to_owned(), kind, subject: subject.to_owned(), preview: preview.to_owned() }
}

fn seed_templates() -> Vec<Template> {
    use CampaignKind::{Custom, FollowUp, Newsletter, Promotional};
    vec![
        template(1, "Welcome Email", FollowUp, "Welcome to CRM Pro!", "Thank you for joining us. Here's what you need to get started..."),
        template(2, "7-Day Follow-up", FollowUp, "How are you enjoying CRM Pro?", "We wanted to check in and see how things are going..."),
        template(3, "Seasonal Sale", Promotional, "Exclusive offer: save 30% today", "Don't miss out on our biggest sale of the season..."),
        template(4, "Monthly Newsletter", Newsletter, "Your monthly update from CRM Pro", "Here are this month's highlights and updates..."),
        template(5, "Payment Reminder", Custom, "Your invoice is due soon", "A friendly reminder that your invoice is due at the end of the week..."),
    ]
}
