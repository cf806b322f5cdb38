//! Customers page model: seed list, search + status filter, add dialog.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use crate::state::list::{Record, RecordList};
use crate::util::validate::{is_blank, is_valid_email};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CustomerStatus {
    Active,
    Inactive,
    #[default]
    Lead,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 3] = [Self::Active, Self::Inactive, Self::Lead];

    pub fn id(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Lead => "lead",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// `(value, label)` pairs for a select input.
    pub fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL.into_iter().map(|s| (s.id(), s.label())).collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Lead => "Lead",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: CustomerStatus,
    pub total_spent_cents: u64,
    pub last_contact: String,
}

impl Record for Customer {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.company.as_str()]
    }
}

/// Fields of the "Add Customer" dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: CustomerStatus,
}

impl CustomerDraft {
    /// Name and a well-formed email are required.
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.name) && is_valid_email(&self.email)
    }
}

#[derive(Clone, Debug)]
pub struct CustomersState {
    pub customers: RecordList<Customer>,
    pub query: String,
    /// `None` shows every status.
    pub status_filter: Option<CustomerStatus>,
    pub add_dialog_open: bool,
}

impl Default for CustomersState {
    fn default() -> Self {
        Self {
            customers: RecordList::seeded(seed_customers()),
            query: String::new(),
            status_filter: None,
            add_dialog_open: false,
        }
    }
}

impl CustomersState {
    /// Customers matching both the search query and the status filter.
    pub fn visible(&self) -> Vec<&Customer> {
        self.customers
            .filter(&self.query)
            .into_iter()
            .filter(|c| self.status_filter.is_none_or(|status| c.status == status))
            .collect()
    }

    pub fn count_by_status(&self, status: CustomerStatus) -> usize {
        self.customers.count_where(|c| c.status == status)
    }

    pub fn open_add_dialog(&mut self) {
        self.add_dialog_open = true;
    }

    pub fn close_add_dialog(&mut self) {
        self.add_dialog_open = false;
    }

    /// Append a customer from the dialog and close it.
    ///
    /// Incomplete drafts add nothing and leave the dialog open.
    pub fn add_customer(&mut self, draft: &CustomerDraft) -> Option<u32> {
        if !draft.is_complete() {
            return None;
        }
        let id = self.customers.push_with(|id| Customer {
            id,
            name: draft.name.trim().to_owned(),
            email: draft.email.trim().to_owned(),
            phone: draft.phone.trim().to_owned(),
            company: draft.company.trim().to_owned(),
            status: draft.status,
            total_spent_cents: 0,
            last_contact: "Just now".to_owned(),
        });
        log::debug!("customer {id} added");
        self.add_dialog_open = false;
        Some(id)
    }
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    company: &str,
    status: CustomerStatus,
    total_spent_cents: u64,
    last_contact: &str,
) -> Customer {
    Customer {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        company: company.to_owned(),
        status,
        total_spent_cents,
        last_contact: last_contact.to_owned(),
    }
}

fn seed_customers() -> Vec<Customer> {
    use CustomerStatus::{Active, Inactive, Lead};
    vec![
        customer(1, "Sarah Johnson", "sarah.johnson@techcorp.com", "+1 (555) 123-4567", "TechCorp Inc.", Active, 1_250_000, "2 days ago"),
        customer(2, "Michael Chen", "m.chen@globalsolutions.com", "+1 (555) 234-5678", "Global Solutions", Active, 890_000, "1 week ago"),
        customer(3, "Emily Rodriguez", "emily.r@innovate.io", "+1 (555) 345-6789", "Innovate.io", Lead, 0, "3 days ago"),
        customer(4, "David Kim", "dkim@nexusventures.com", "+1 (555) 456-7890", "Nexus Ventures", Inactive, 430_000, "2 months ago"),
        customer(5, "Lisa Thompson", "lisa.t@brightpath.co", "+1 (555) 567-8901", "BrightPath Co.", Active, 2_175_000, "Yesterday"),
        customer(6, "James Wilson", "jwilson@summitgroup.com", "+1 (555) 678-9012", "Summit Group", Lead, 0, "5 days ago"),
    ]
}
