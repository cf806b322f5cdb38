//! Billing page model: invoices, subscriptions, summary figures.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use crate::state::list::{Record, RecordList};
use crate::util::format::parse_amount_cents;
use crate::util::validate::is_blank;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingTab {
    #[default]
    Invoices,
    Subscriptions,
}

impl BillingTab {
    pub const ALL: [BillingTab; 2] = [Self::Invoices, Self::Subscriptions];

    pub fn label(self) -> &'static str {
        match self {
            Self::Invoices => "Invoices",
            Self::Subscriptions => "Subscriptions",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invoice {
    pub id: u32,
    pub number: String,
    pub customer: String,
    pub amount_cents: u64,
    pub status: InvoiceStatus,
    pub issued: String,
    pub due: String,
}

impl Record for Invoice {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str(), self.customer.as_str()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Trialing => "Trialing",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subscription {
    pub id: u32,
    pub customer: String,
    pub plan: String,
    /// Monthly price.
    pub amount_cents: u64,
    pub status: SubscriptionStatus,
    pub renews: String,
}

impl Record for Subscription {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer.as_str(), self.plan.as_str()]
    }
}

/// Fields of the "Create Invoice" dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub customer: String,
    pub amount: String,
    pub due: String,
}

/// Derived header figures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BillingSummary {
    pub paid_cents: u64,
    /// Pending plus overdue.
    pub outstanding_cents: u64,
    pub overdue_count: usize,
    /// Active subscriptions only; trials do not count.
    pub mrr_cents: u64,
}

#[derive(Clone, Debug)]
pub struct BillingState {
    pub invoices: RecordList<Invoice>,
    pub subscriptions: RecordList<Subscription>,
    pub tab: BillingTab,
    pub query: String,
    pub invoice_dialog_open: bool,
}

impl Default for BillingState {
    fn default() -> Self {
        Self {
            invoices: RecordList::seeded(seed_invoices()),
            subscriptions: RecordList::seeded(seed_subscriptions()),
            tab: BillingTab::Invoices,
            query: String::new(),
            invoice_dialog_open: false,
        }
    }
}

/// `INV-0007` style number for an invoice id.
pub fn invoice_number(id: u32) -> String {
    format!("INV-{id:04}")
}

impl BillingState {
    pub fn select_tab(&mut self, tab: BillingTab) {
        self.tab = tab;
    }

    pub fn visible_invoices(&self) -> Vec<&Invoice> {
        self.invoices.filter(&self.query)
    }

    pub fn visible_subscriptions(&self) -> Vec<&Subscription> {
        self.subscriptions.filter(&self.query)
    }

    /// Totals saturate at `u64::MAX` rather than wrapping.
    pub fn summary(&self) -> BillingSummary {
        let mut summary = BillingSummary::default();
        for invoice in self.invoices.items() {
            match invoice.status {
                InvoiceStatus::Paid => summary.paid_cents = summary.paid_cents.saturating_add(invoice.amount_cents),
                InvoiceStatus::Pending => {
                    summary.outstanding_cents = summary.outstanding_cents.saturating_add(invoice.amount_cents);
                }
                InvoiceStatus::Overdue => {
                    summary.outstanding_cents = summary.outstanding_cents.saturating_add(invoice.amount_cents);
                    summary.overdue_count += 1;
                }
            }
        }
        summary.mrr_cents = self
            .subscriptions
            .items()
            .iter()
            .filter(|s| s.status == SubscriptionStatus::Active)
            .fold(0, |total: u64, s| total.saturating_add(s.amount_cents));
        summary
    }

    /// Append a pending invoice and close the dialog.
    ///
    /// Needs a customer name and a positive amount.
    pub fn create_invoice(&mut self, draft: &InvoiceDraft) -> Option<u32> {
        if is_blank(&draft.customer) {
            return None;
        }
        let amount_cents = parse_amount_cents(&draft.amount)?;
        let due = if is_blank(&draft.due) { "Net 30".to_owned() } else { draft.due.trim().to_owned() };
        let id = self.invoices.push_with(|id| Invoice {
            id,
            number: invoice_number(id),
            customer: draft.customer.trim().to_owned(),
            amount_cents,
            status: InvoiceStatus::Pending,
            issued: "Today".to_owned(),
            due,
        });
        log::debug!("invoice {} created", invoice_number(id));
        self.invoice_dialog_open = false;
        Some(id)
    }
}

fn invoice(id: u32, customer: &str, amount_cents: u64, status: InvoiceStatus, issued: &str, due: &str) -> Invoice {
    Invoice {
        id,
        number: invoice_number(id),
        customer: customer.to_owned(),
        amount_cents,
        status,
        issued: issued.to_owned(),
        due: due.to_owned(),
    }
}

fn subscription(id: u32, customer: &str, plan: &str, amount_cents: u64, status: SubscriptionStatus, renews: &str) -> Subscription {
    Subscription {
        id,
        customer: customer.to_owned(),
        plan: plan.to_owned(),
        amount_cents,
        status,
        renews: renews.to_owned(),
    }
}

fn seed_invoices() -> Vec<Invoice> {
    use InvoiceStatus::{Overdue, Paid, Pending};
    vec![
        invoice(1, "TechCorp Inc.", 1_250_000, Paid, "2024-05-01", "2024-05-31"),
        invoice(2, "BrightPath Co.", 480_000, Paid, "2024-05-03", "2024-06-02"),
        invoice(3, "Nexus Ventures", 320_000, Overdue, "2024-04-10", "2024-05-10"),
        invoice(4, "Global Solutions", 890_000, Pending, "2024-05-20", "2024-06-19"),
        invoice(5, "Innovate.io", 150_000, Pending, "2024-05-28", "2024-06-27"),
    ]
}

fn seed_subscriptions() -> Vec<Subscription> {
    use SubscriptionStatus::{Active, Cancelled, Trialing};
    vec![
        subscription(1, "TechCorp Inc.", "Enterprise", 49_900, Active, "2024-07-01"),
        subscription(2, "Global Solutions", "Professional", 19_900, Active, "2024-06-15"),
        subscription(3, "Innovate.io", "Starter", 4_900, Trialing, "2024-06-10"),
        subscription(4, "Nexus Ventures", "Professional", 19_900, Cancelled, "—"),
    ]
}
