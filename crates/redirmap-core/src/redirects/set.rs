//! Insertion-ordered, path-unique redirect collection.

use indexmap::IndexMap;

use super::RedirectRecord;

/// Map from path to target that remembers first-insertion order.
///
/// `insert` is first-write-wins; `replace` overwrites a target in place
/// without moving the record.
#[derive(Debug, Clone, Default)]
pub struct RedirectSet {
    entries: IndexMap<String, String>,
}

impl RedirectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the record unless its path is already present. Returns true if added.
    pub fn insert(&mut self, record: RedirectRecord) -> bool {
        if self.entries.contains_key(&record.path) {
            return false;
        }
        self.entries.insert(record.path, record.target);
        true
    }

    /// Sets the target for `path`, appending if the path is new.
    /// Returns the previous target, if any.
    pub fn replace(&mut self, record: RedirectRecord) -> Option<String> {
        match self.entries.get_mut(&record.path) {
            Some(target) => Some(std::mem::replace(target, record.target)),
            None => {
                self.entries.insert(record.path, record.target);
                None
            }
        }
    }

    /// Inserts every record in order; returns how many were added.
    pub fn extend_first_wins<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = RedirectRecord>,
    {
        let mut added = 0;
        for record in records {
            if self.insert(record) {
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, t)| (p.as_str(), t.as_str()))
    }

    pub fn into_records(self) -> Vec<RedirectRecord> {
        self.entries
            .into_iter()
            .map(|(path, target)| RedirectRecord { path, target })
            .collect()
    }
}
