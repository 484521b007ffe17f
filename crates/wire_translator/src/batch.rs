//! TranslatedBatch - ordered decoded output
//!
//! Keys are unique; inserting an existing key overwrites the payload in
//! place, keeping the key's first-seen position. Iteration is deterministic
//! source order, so downstream FIFO delivery order never depends on map
//! internals.

/// Decoded records keyed by grouping key, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedBatch {
    entries: Vec<(String, String)>,
}

impl TranslatedBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a payload under `key`; last write wins
    pub fn insert(&mut self, key: impl Into<String>, payload: impl Into<String>) {
        let key = key.into();
        let payload = payload.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = payload,
            None => self.entries.push((key, payload)),
        }
    }

    /// Payload for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, payload)| payload.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(grouping key, payload)` pairs in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p.as_str()))
    }
}

impl IntoIterator for TranslatedBatch {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
