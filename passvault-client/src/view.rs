//! Rendered record rows
//!
//! Mirrors the table the user sees. Password cells are masked unless the row
//! is revealed; reveal state is view-only and never sent to the server.

use passvault_core::types::Record;

use crate::cache::ClientCache;

/// Shown in place of a non-empty password while masked
pub const MASK: &str = "••••••••";
/// Shown for an empty password, masked or revealed
pub const NOT_FOUND_TEXT: &str = "Not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub website: String,
    pub username: String,
    /// Text currently displayed in the password cell
    pub password_text: String,
    pub revealed: bool,
    /// The record has no password
    pub not_found: bool,
    /// Matched by the last search
    pub highlighted: bool,
}

impl Row {
    fn from_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            website: record.website.clone(),
            username: record.username.clone(),
            password_text: password_text(&record.password, false),
            revealed: false,
            not_found: record.password.is_empty(),
            highlighted: false,
        }
    }

    fn show_password(&mut self, password: &str) {
        self.password_text = password_text(password, self.revealed);
        self.not_found = password.is_empty();
    }

    fn matches(&self, needle: &str) -> bool {
        self.website.to_lowercase().contains(needle) || self.username.to_lowercase().contains(needle)
    }
}

fn password_text(password: &str, revealed: bool) -> String {
    if password.is_empty() {
        NOT_FOUND_TEXT.to_string()
    } else if revealed {
        password.to_string()
    } else {
        MASK.to_string()
    }
}

/// Result of a client-side search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub matches: usize,
    /// Id of the first highlighted row, for scrolling into view
    pub first_match: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordView {
    rows: Vec<Row>,
}

impl RecordView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all rows and render `records` in order.
    pub fn render<'a>(&mut self, records: impl IntoIterator<Item = &'a Record>) {
        self.rows = records.into_iter().map(Row::from_record).collect();
    }

    pub fn append(&mut self, record: &Record) {
        self.rows.push(Row::from_record(record));
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn row_mut(&mut self, id: &str) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// Flip a row between masked and plaintext using the cached password.
    ///
    /// Reads the cache only. A row whose record is no longer cached shows
    /// `NOT_FOUND_TEXT`. Returns `None` if no row has this id.
    pub fn toggle_reveal(&mut self, cache: &ClientCache, id: &str) -> Option<&Row> {
        let password = cache.get(id).map_or("", |record| record.password.as_str());
        let row = self.row_mut(id)?;
        row.revealed = !row.revealed;
        row.show_password(password);
        Some(row)
    }

    /// Refresh a row from a saved record, keeping its reveal state.
    ///
    /// Returns `false` if the row is not rendered.
    pub fn apply_update(&mut self, record: &Record) -> bool {
        let Some(row) = self.row_mut(&record.id) else {
            return false;
        };
        row.website.clone_from(&record.website);
        row.username.clone_from(&record.username);
        row.show_password(&record.password);
        true
    }

    pub fn remove_row(&mut self, id: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }

    /// Case-insensitive substring match over website and username.
    ///
    /// Highlights matching rows and clears every other highlight. An empty
    /// query (after trimming) matches nothing.
    pub fn search(&mut self, query: &str) -> SearchOutcome {
        let needle = query.trim().to_lowercase();
        let mut outcome = SearchOutcome::default();

        for row in &mut self.rows {
            row.highlighted = !needle.is_empty() && row.matches(&needle);
            if row.highlighted {
                outcome.matches += 1;
                if outcome.first_match.is_none() {
                    outcome.first_match = Some(row.id.clone());
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn record(id: &str, website: &str, username: &str, password: &str) -> Record {
        Record {
            id: id.to_string(),
            website: website.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn fixture() -> (ClientCache, RecordView) {
        let records = vec![
            record("1", "GitHub.com", "alice", "hunter2"),
            record("2", "example.com", "bob", ""),
            record("3", "mail.example.org", "Alice.W", "pw"),
        ];
        let mut view = RecordView::new();
        view.render(&records);
        let mut cache = ClientCache::new();
        cache.bootstrap(records);
        (cache, view)
    }

    #[test]
    fn rows_start_masked() {
        let (_, view) = fixture();
        let row = view.row("1").unwrap();
        assert_eq!(row.password_text, MASK);
        assert!(!row.revealed);

        let empty = view.row("2").unwrap();
        assert_eq!(empty.password_text, NOT_FOUND_TEXT);
        assert!(empty.not_found);
    }

    #[test]
    fn toggle_reveal_reads_the_cache() {
        let (cache, mut view) = fixture();

        let row = view.toggle_reveal(&cache, "1").unwrap();
        assert!(row.revealed);
        assert_eq!(row.password_text, "hunter2");

        let row = view.toggle_reveal(&cache, "1").unwrap();
        assert!(!row.revealed);
        assert_eq!(row.password_text, MASK);
    }

    #[test]
    fn empty_password_shows_not_found_in_both_states() {
        let (cache, mut view) = fixture();
        let row = view.toggle_reveal(&cache, "2").unwrap();
        assert!(row.revealed);
        assert_eq!(row.password_text, NOT_FOUND_TEXT);
        assert!(row.not_found);
    }

    #[test]
    fn uncached_row_reveals_as_not_found() {
        let (mut cache, mut view) = fixture();
        cache.remove("1");
        let row = view.toggle_reveal(&cache, "1").unwrap();
        assert_eq!(row.password_text, NOT_FOUND_TEXT);
        assert!(view.toggle_reveal(&cache, "missing").is_none());
    }

    #[test]
    fn apply_update_keeps_reveal_state() {
        let (cache, mut view) = fixture();
        view.toggle_reveal(&cache, "1");

        assert!(view.apply_update(&record("1", "gitlab.com", "alice", "new-pw")));
        let row = view.row("1").unwrap();
        assert_eq!(row.website, "gitlab.com");
        assert!(row.revealed);
        assert_eq!(row.password_text, "new-pw");

        assert!(view.apply_update(&record("3", "mail.example.org", "Alice.W", "")));
        let row = view.row("3").unwrap();
        assert!(!row.revealed);
        assert_eq!(row.password_text, NOT_FOUND_TEXT);

        assert!(!view.apply_update(&record("9", "x", "", "")));
    }

    #[test]
    fn search_is_case_insensitive_over_website_and_username() {
        let (_, mut view) = fixture();

        let outcome = view.search("  ALICE ");
        assert_eq!(outcome.matches, 2);
        assert_eq!(outcome.first_match.as_deref(), Some("1"));

        let outcome = view.search("example");
        assert_eq!(outcome.matches, 2);
        assert_eq!(outcome.first_match.as_deref(), Some("2"));
        assert!(!view.row("1").unwrap().highlighted);
        assert!(view.row("3").unwrap().highlighted);
    }

    #[test]
    fn empty_search_clears_highlights() {
        let (_, mut view) = fixture();
        view.search("example");
        let outcome = view.search("   ");
        assert_eq!(outcome, SearchOutcome::default());
        assert!(view.rows().iter().all(|row| !row.highlighted));
    }

    #[test]
    fn remove_row_by_id() {
        let (_, mut view) = fixture();
        assert!(view.remove_row("2"));
        assert!(!view.remove_row("2"));
        assert_eq!(view.rows().len(), 2);
    }
}
