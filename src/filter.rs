use crate::models::Entry;
use serde::Deserialize;

/// History filter as submitted by the page. Blank fields and `mood=all`
/// place no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryFilter {
    pub from: Option<String>,
    pub to: Option<String>,
    pub mood: Option<String>,
}

impl EntryFilter {
    fn from_date(&self) -> Option<&str> {
        present(&self.from)
    }

    fn to_date(&self) -> Option<&str> {
        present(&self.to)
    }

    fn mood_key(&self) -> Option<&str> {
        present(&self.mood).filter(|key| *key != "all")
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|text| !text.is_empty())
}

pub fn matches(entry: &Entry, filter: &EntryFilter) -> bool {
    if filter.from_date().is_some_and(|from| entry.date.as_str() < from) {
        return false;
    }
    if filter.to_date().is_some_and(|to| entry.date.as_str() > to) {
        return false;
    }
    if filter.mood_key().is_some_and(|key| entry.mood_key != key) {
        return false;
    }
    true
}

pub fn filtered(entries: &[Entry], filter: &EntryFilter) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| matches(entry, filter))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, mood_key: &str) -> Entry {
        Entry {
            id: format!("id-{date}"),
            date: date.to_string(),
            mood_key: mood_key.to_string(),
            score: 3,
            note: String::new(),
        }
    }

    fn history() -> Vec<Entry> {
        vec![
            entry("2024-01-12", "great"),
            entry("2024-01-10", "bad"),
            entry("2024-01-07", "great"),
            entry("2024-01-05", "ok"),
            entry("2024-01-01", "bad"),
        ]
    }

    fn filter(from: &str, to: &str, mood: &str) -> EntryFilter {
        let owned = |text: &str| Some(text.to_string());
        EntryFilter {
            from: owned(from),
            to: owned(to),
            mood: owned(mood),
        }
    }

    fn dates(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.date.as_str()).collect()
    }

    #[test]
    fn blank_filter_keeps_everything_in_order() {
        let entries = history();
        assert_eq!(filtered(&entries, &EntryFilter::default()), entries);
        assert_eq!(filtered(&entries, &filter("", "", "all")), entries);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let entries = history();
        let result = filtered(&entries, &filter("2024-01-05", "2024-01-10", "all"));
        assert_eq!(dates(&result), vec!["2024-01-10", "2024-01-07", "2024-01-05"]);
    }

    #[test]
    fn mood_and_range_combine() {
        let entries = history();
        let result = filtered(&entries, &filter("2024-01-02", "", "great"));
        assert_eq!(dates(&result), vec!["2024-01-12", "2024-01-07"]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let entries = history();
        assert!(filtered(&entries, &filter("2024-01-10", "2024-01-05", "all")).is_empty());
    }
}
