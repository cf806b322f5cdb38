//! Append-only record list backing every page-local collection.
//!
//! DESIGN
//! ======
//! Pages seed a list from literals, filter it per keystroke, and append new
//! records with the next id. Nothing is ever removed or reordered, so ids stay
//! monotonic and insertion order is the only ordering.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::util::search::matches_any;

/// A flat display record with a numeric id and searchable text fields.
pub trait Record {
    fn id(&self) -> u32;

    /// Fields the page search box matches against.
    fn search_fields(&self) -> Vec<&str>;
}

/// Insertion-ordered records plus the next client-generated id.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordList<T> {
    items: Vec<T>,
    next_id: u32,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self { items: Vec::new(), next_id: 1 }
    }
}

impl<T: Record> RecordList<T> {
    /// Wrap a seed list; new ids continue after the highest seeded id.
    pub fn seeded(items: Vec<T>) -> Self {
        let next_id = items.iter().map(Record::id).max().map_or(1, |max| max + 1);
        Self { items, next_id }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id the next appended record will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Append a record built from the next id and return that id.
    pub fn push_with(&mut self, build: impl FnOnce(u32) -> T) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(build(id));
        id
    }

    /// Records whose search fields contain `query`, in insertion order.
    pub fn filter(&self, query: &str) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| matches_any(query, &item.search_fields()))
            .collect()
    }

    pub fn count_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.items.iter().filter(|item| pred(item)).count()
    }
}
