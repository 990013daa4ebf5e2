//! Client-side record cache

use std::collections::HashMap;

use passvault_core::types::Record;

/// Last-known record per id, in the order records were first seen.
///
/// Filled once from a list call, then updated with every successful
/// create/update response. An absent id is a normal state (e.g. after a
/// delete), not an error.
#[derive(Debug, Default, Clone)]
pub struct ClientCache {
    entries: HashMap<String, Record>,
    order: Vec<String>,
}

impl ClientCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cache with a list result.
    pub fn bootstrap(&mut self, records: impl IntoIterator<Item = Record>) {
        self.entries.clear();
        self.order.clear();
        for record in records {
            self.put(record);
        }
    }

    /// Insert or overwrite the entry for `record.id`, returning the previous one.
    pub fn put(&mut self, record: Record) -> Option<Record> {
        let id = record.id.clone();
        let previous = self.entries.insert(id.clone(), record);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.entries.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Record> {
        let removed = self.entries.remove(id)?;
        self.order.retain(|known| known != id);
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
