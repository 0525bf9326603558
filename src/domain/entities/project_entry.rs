//! Stored project summary

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A named snapshot held by a `GraphStore`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub node_count: usize,
}

impl ProjectEntry {
    pub fn new(name: impl Into<String>, saved_at: DateTime<Utc>, node_count: usize) -> Self {
        Self {
            name: name.into(),
            saved_at,
            node_count,
        }
    }

    /// Sort entries by name, the order `GraphStore::list` promises
    pub fn sort(entries: &mut [ProjectEntry]) {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_is_by_name() {
        let now = Utc::now();
        let mut entries = vec![
            ProjectEntry::new("shop", now, 3),
            ProjectEntry::new("rides", now, 5),
        ];
        ProjectEntry::sort(&mut entries);
        assert_eq!(entries[0].name, "rides");
    }
}
