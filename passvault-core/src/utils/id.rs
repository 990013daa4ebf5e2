//! Record id generation.
//!
//! Ids are opaque strings on the wire. The default source is a random
//! UUID v4; uniqueness against the loaded snapshot is checked, not assumed.

use std::collections::HashSet;

use crate::types::Record;

type IdSource = Box<dyn Fn() -> String + Send + Sync>;

/// Collision-checked id generator.
pub struct IdGenerator {
    source: IdSource,
}

impl IdGenerator {
    /// Random UUID v4 ids.
    #[must_use]
    pub fn uuid() -> Self {
        Self::from_fn(|| uuid::Uuid::new_v4().to_string())
    }

    /// Custom id source (deterministic ids for tests or embedding).
    #[must_use]
    pub fn from_fn<F>(source: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            source: Box::new(source),
        }
    }

    /// Produce an id distinct from every id in `existing`.
    pub fn next_unique(&self, existing: &[Record]) -> String {
        let taken: HashSet<&str> = existing.iter().map(|r| r.id.as_str()).collect();
        loop {
            let id = (self.source)();
            if !taken.contains(id.as_str()) {
                return id;
            }
            log::debug!("Generated id {id} collides with an existing record, retrying");
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::uuid()
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}
