//! Dashboard chrome state: selected page, sidebar visibility, theme.
//!
//! DESIGN
//! ======
//! Keeps shell navigation out of the page models so each page can own its
//! records without knowing how it was reached. Only sidebar clicks mutate
//! `page`; unknown page ids fall back to the home page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// The six fixed dashboard destinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Dashboard,
    Customers,
    Email,
    Chat,
    Billing,
    Users,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Customers,
        Page::Email,
        Page::Chat,
        Page::Billing,
        Page::Users,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Customers => "customers",
            Self::Email => "email",
            Self::Chat => "chat",
            Self::Billing => "billing",
            Self::Users => "users",
        }
    }

    /// Resolve a page id; anything unrecognized lands on the home page.
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|page| page.id() == id.trim())
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Customers => "Customers",
            Self::Email => "Email",
            Self::Chat => "Chat",
            Self::Billing => "Billing",
            Self::Users => "Users",
        }
    }

    /// Header title shown above the page body.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard Overview",
            Self::Customers => "Customer Management",
            Self::Email => "Email & Campaigns",
            Self::Chat => "Team Chat",
            Self::Billing => "Billing & Invoices",
            Self::Users => "User Management",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::Customers => "☺",
            Self::Email => "✉",
            Self::Chat => "💬",
            Self::Billing => "$",
            Self::Users => "⚙",
        }
    }
}

/// Shell state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub page: Page,
    /// Mobile sidebar overlay; the desktop layout always shows the sidebar.
    pub sidebar_open: bool,
    pub dark_mode: bool,
}

impl UiState {
    /// Show `page` and close the mobile sidebar.
    pub fn select_page(&mut self, page: Page) {
        if self.page != page {
            log::debug!("navigate {} -> {}", self.page.id(), page.id());
        }
        self.page = page;
        self.sidebar_open = false;
    }

    /// Same as [`UiState::select_page`] for a raw page id.
    pub fn select_page_id(&mut self, id: &str) {
        self.select_page(Page::from_id(id));
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
