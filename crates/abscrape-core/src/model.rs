use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// One extracted abstract, keyed by its 7-digit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbstractRecord {
    pub id: String,
    /// Truncated, whitespace-normalized body.
    #[serde(rename = "abstract")]
    pub summary: String,
    #[serde(rename = "full_text")]
    pub body: String,
}

/// What to do when a pass produces an id that is already recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Replace the stored record, keeping its original position.
    KeepLast,
    /// Discard the newcomer.
    KeepFirst,
}

/// Insertion-ordered mapping from id to record.
///
/// Serializes as a JSON object whose keys follow insertion order, so the
/// output file is stable across runs on the same input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbstractSet {
    records: Vec<AbstractRecord>,
    index: HashMap<String, usize>,
}

impl AbstractSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under `policy`. Returns true if the set changed.
    pub fn insert_with(&mut self, record: AbstractRecord, policy: DuplicatePolicy) -> bool {
        match self.index.get(&record.id) {
            Some(&pos) => match policy {
                DuplicatePolicy::KeepLast => {
                    self.records[pos] = record;
                    true
                }
                DuplicatePolicy::KeepFirst => false,
            },
            None => {
                self.index.insert(record.id.clone(), self.records.len());
                self.records.push(record);
                true
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&AbstractRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbstractRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }
}

impl Serialize for AbstractSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.id, record)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, body: &str) -> AbstractRecord {
        AbstractRecord {
            id: id.into(),
            summary: body.into(),
            body: body.into(),
        }
    }

    #[test]
    fn test_keep_last_replaces_in_place() {
        let mut set = AbstractSet::new();
        set.insert_with(record("1000001", "a"), DuplicatePolicy::KeepLast);
        set.insert_with(record("1000002", "b"), DuplicatePolicy::KeepLast);
        assert!(set.insert_with(record("1000001", "c"), DuplicatePolicy::KeepLast));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("1000001").unwrap().body, "c");
        assert_eq!(set.ids().collect::<Vec<_>>(), vec!["1000001", "1000002"]);
    }

    #[test]
    fn test_keep_first_discards_newcomer() {
        let mut set = AbstractSet::new();
        set.insert_with(record("1000001", "a"), DuplicatePolicy::KeepFirst);
        assert!(!set.insert_with(record("1000001", "b"), DuplicatePolicy::KeepFirst));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("1000001").unwrap().body, "a");
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut set = AbstractSet::new();
        set.insert_with(record("2000000", "zweite"), DuplicatePolicy::KeepLast);
        set.insert_with(record("1000000", "première"), DuplicatePolicy::KeepLast);

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"{"2000000":{"id":"2000000","abstract":"zweite","full_text":"zweite"},"1000000":{"id":"1000000","abstract":"première","full_text":"première"}}"#
        );
    }

    #[test]
    fn test_empty_set() {
        let set = AbstractSet::new();
        assert!(set.is_empty());
        assert!(set.get("1234567").is_none());
        assert_eq!(serde_json::to_string(&set).unwrap(), "{}");
    }
}
