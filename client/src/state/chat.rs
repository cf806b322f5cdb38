//! Chat page model: contacts, per-contact threads, local sending.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::state::list::{Record, RecordList};
use crate::util::validate::is_blank;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    Me,
    Contact,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub online: bool,
    pub unread: u32,
}

impl Record for Contact {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.title.as_str()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u32,
    pub contact_id: u32,
    pub author: Author,
    pub body: String,
    pub time: String,
}

impl Record for Message {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.body.as_str()]
    }
}

#[derive(Clone, Debug)]
pub struct ChatState {
    pub contacts: RecordList<Contact>,
    pub messages: RecordList<Message>,
    pub selected: Option<u32>,
    pub query: String,
}

impl Default for ChatState {
    fn default() -> Self {
        let mut state = Self {
            contacts: RecordList::seeded(seed_contacts()),
            messages: RecordList::seeded(seed_messages()),
            selected: None,
            query: String::new(),
        };
        if let Some(first) = state.contacts.items().first().map(|c| c.id) {
            state.select_contact(first);
        }
        state
    }
}

impl ChatState {
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        self.contacts.filter(&self.query)
    }

    /// Open a contact's thread and clear its unread badge.
    ///
    /// Returns `false` (selection unchanged) for an unknown id.
    pub fn select_contact(&mut self, id: u32) -> bool {
        let Some(contact) = self.contacts.get_mut(id) else {
            return false;
        };
        contact.unread = 0;
        self.selected = Some(id);
        true
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected.and_then(|id| self.contacts.get(id))
    }

    pub fn thread(&self, contact_id: u32) -> Vec<&Message> {
        self.messages
            .items()
            .iter()
            .filter(|m| m.contact_id == contact_id)
            .collect()
    }

    pub fn last_message(&self, contact_id: u32) -> Option<&Message> {
        self.messages
            .items()
            .iter()
            .rev()
            .find(|m| m.contact_id == contact_id)
    }

    pub fn total_unread(&self) -> u32 {
        self.contacts.items().iter().map(|c| c.unread).sum()
    }

    /// Append `body` from me to the selected thread.
    ///
    /// Blank text or no selection sends nothing. No reply is generated.
    pub fn send_message(&mut self, body: &str) -> Option<u32> {
        if is_blank(body) {
            return None;
        }
        let contact_id = self.selected?;
        let id = self.messages.push_with(|id| Message {
            id,
            contact_id,
            author: Author::Me,
            body: body.trim().to_owned(),
            time: "Just now".to_owned(),
        });
        log::debug!("message {id} sent to contact {contact_id}");
        Some(id)
    }
}

fn contact(id: u32, name: &str, title: &str, online: bool, unread: u32) -> Contact {
    Contact { id, name: name.to_owned(), title: title.to_owned(), online, unread }
}

fn message(id: u32, contact_id: u32, author: Author, body: &str, time: &str) -> Message {
    Message { id, contact_id, author, body: body.to_owned(), time: time.to_owned() }
}

fn seed_contacts() -> Vec<Contact> {
    vec![
        contact(1, "Sarah Johnson", "Sales Manager", true, 0),
        contact(2, "Michael Chen", "Account Executive", true, 2),
        contact(3, "Emily Rodriguez", "Marketing Lead", false, 0),
        contact(4, "David Kim", "Support Engineer", false, 1),
        contact(5, "Lisa Thompson", "Customer Success", true, 0),
    ]
}

fn seed_messages() -> Vec<Message> {
    use Author::{Contact as Them, Me};
    vec![
        message(1, 1, Them, "Hi! Did you get a chance to review the TechCorp proposal?", "10:30 AM"),
        message(2, 1, Me, "Yes, looks good. I left a couple of comments on pricing.", "10:32 AM"),
        message(3, 1, Them, "Perfect, I'll update it and send it over this afternoon.", "10:35 AM"),
        message(4, 2, Them, "The Global Solutions renewal is ready for signature.", "9:15 AM"),
        message(5, 2, Them, "Can you loop in legal before Friday?", "9:16 AM"),
        message(6, 3, Me, "Campaign numbers look great this week!", "Yesterday"),
        message(7, 4, Them, "Ticket #4821 is escalated, customer is waiting on a callback.", "Yesterday"),
        message(8, 5, Them, "BrightPath onboarding call went well.", "Mon"),
    ]
}
