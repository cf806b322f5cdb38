//! User-management page model: team members, role filter, invite dialog.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::state::list::{Record, RecordList};
use crate::util::validate::{is_blank, is_valid_email};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Sales,
    Support,
}

impl Role {
    pub const ALL: [Role; 4] = [Self::Admin, Self::Manager, Self::Sales, Self::Support];

    pub fn id(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Sales => "sales",
            Self::Support => "support",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }

    pub fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL.into_iter().map(|r| (r.id(), r.label())).collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Sales => "Sales",
            Self::Support => "Support",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Invited,
    Suspended,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Invited => "Invited",
            Self::Suspended => "Suspended",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub last_active: String,
}

impl Record for TeamUser {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

/// Fields of the "Add User" dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Clone, Debug)]
pub struct UsersState {
    pub users: RecordList<TeamUser>,
    pub query: String,
    pub role_filter: Option<Role>,
    pub add_dialog_open: bool,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            users: RecordList::seeded(seed_users()),
            query: String::new(),
            role_filter: None,
            add_dialog_open: false,
        }
    }
}

impl UsersState {
    pub fn visible(&self) -> Vec<&TeamUser> {
        self.users
            .filter(&self.query)
            .into_iter()
            .filter(|u| self.role_filter.is_none_or(|role| u.role == role))
            .collect()
    }

    pub fn count_by_role(&self, role: Role) -> usize {
        self.users.count_where(|u| u.role == role)
    }

    pub fn active_count(&self) -> usize {
        self.users.count_where(|u| u.status == UserStatus::Active)
    }

    /// Append an invited user and close the dialog.
    pub fn add_user(&mut self, draft: &UserDraft) -> Option<u32> {
        if is_blank(&draft.name) || !is_valid_email(&draft.email) {
            return None;
        }
        let id = self.users.push_with(|id| TeamUser {
            id,
            name: draft.name.trim().to_owned(),
            email: draft.email.trim().to_owned(),
            role: draft.role,
            status: UserStatus::Invited,
            last_active: "Never".to_owned(),
        });
        log::debug!("user {id} invited as {}", draft.role.id());
        self.add_dialog_open = false;
        Some(id)
    }
}

fn user(id: u32, name: &str, email: &str, role: Role, status: UserStatus, last_active: &str) -> TeamUser {
    TeamUser {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        role,
        status,
        last_active: last_active.to_owned(),
    }
}

fn seed_users() -> Vec<TeamUser> {
    use Role::{Admin, Manager, Sales, Support};
    use UserStatus::{Active, Invited, Suspended};
    vec![
        user(1, "John Doe", "john.doe@crmpro.com", Admin, Active, "Online now"),
        user(2, "Jane Smith", "jane.smith@crmpro.com", Manager, Active, "5 minutes ago"),
        user(3, "Robert Brown", "robert.brown@crmpro.com", Sales, Active, "1 hour ago"),
        user(4, "Anna Lee", "anna.lee@crmpro.com", Sales, Invited, "Never"),
        user(5, "Carlos Diaz", "carlos.diaz@crmpro.com", Support, Active, "Yesterday"),
        user(6, "Priya Patel", "priya.patel@crmpro.com", Support, Suspended, "3 weeks ago"),
    ]
}
