use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: u32,
    name: String,
    tag: String,
}

impl Record for Row {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.tag.as_str()]
    }
}

fn row(id: u32, name: &str, tag: &str) -> Row {
    Row { id, name: name.to_owned(), tag: tag.to_owned() }
}

fn sample() -> RecordList<Row> {
    RecordList::seeded(vec![row(1, "Alpha", "red"), row(2, "Beta", "blue"), row(5, "Gamma", "red")])
}

// =============================================================
// Seeding and ids
// =============================================================

#[test]
fn empty_list_starts_at_one() {
    let list = RecordList::<Row>::default();
    assert!(list.is_empty());
    assert_eq!(list.next_id(), 1);
}

#[test]
fn seeded_list_continues_after_highest_id() {
    assert_eq!(sample().next_id(), 6);
}

#[test]
fn push_with_appends_at_end_with_increasing_ids() {
    let mut list = sample();
    let first = list.push_with(|id| row(id, "Delta", "green"));
    let second = list.push_with(|id| row(id, "Epsilon", "green"));

    assert_eq!((first, second), (6, 7));
    assert_eq!(list.len(), 5);
    assert_eq!(list.items().last().map(|r| r.name.as_str()), Some("Epsilon"));
}

#[test]
fn get_and_get_mut_find_by_id() {
    let mut list = sample();
    assert_eq!(list.get(2).map(|r| r.name.as_str()), Some("Beta"));
    assert!(list.get(3).is_none());

    if let Some(r) = list.get_mut(5) {
        r.tag = "violet".to_owned();
    }
    assert_eq!(list.get(5).map(|r| r.tag.as_str()), Some("violet"));
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_unique_substring_returns_single_record() {
    let list = sample();
    let hits = list.filter("bet");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn filter_absent_substring_returns_empty() {
    assert!(sample().filter("omega").is_empty());
}

#[test]
fn filter_matches_secondary_field_and_keeps_order() {
    let ids: Vec<u32> = sample().filter("RED").iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 5]);
}

#[test]
fn filter_blank_query_returns_everything() {
    assert_eq!(sample().filter("  ").len(), 3);
}

#[test]
fn count_where_counts_matching_records() {
    assert_eq!(sample().count_where(|r| r.tag == "red"), 2);
}
