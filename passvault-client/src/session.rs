//! User-action flows over API, cache, view and status line.

use passvault_core::types::{CreateRecordRequest, Record, UpdateRecordRequest};

use crate::api::RecordApi;
use crate::cache::ClientCache;
use crate::error::{ClientError, ClientResult};
use crate::status::{StatusKind, StatusLine};
use crate::view::{RecordView, Row, SearchOutcome};

const WEBSITE_REQUIRED: &str = "Website is required";

/// One user's view of the vault.
///
/// Each action issues at most one request and is never retried. Failures are
/// reported on the status line; successful mutations update the cache first
/// and the view second, so the cache always holds what the server returned.
pub struct VaultSession<A: RecordApi> {
    api: A,
    cache: ClientCache,
    view: RecordView,
    status: StatusLine,
}

impl<A: RecordApi> VaultSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            cache: ClientCache::new(),
            view: RecordView::new(),
            status: StatusLine::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn cache(&self) -> &ClientCache {
        &self.cache
    }

    pub fn view(&self) -> &RecordView {
        &self.view
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Load every record, fill the cache and render the table.
    pub async fn start(&mut self) -> ClientResult<usize> {
        let records = self
            .api
            .list()
            .await
            .inspect_err(|e| log::error!("Failed to load records: {e}"))?;

        self.view.render(&records);
        self.cache.bootstrap(records);
        log::info!("Loaded {} records", self.cache.len());
        Ok(self.cache.len())
    }

    /// Create a record from the add form.
    ///
    /// `website` and `username` are trimmed; `password` is sent as typed.
    pub async fn add(&mut self, website: &str, username: &str, password: &str) -> Option<Record> {
        let website = website.trim();
        if website.is_empty() {
            self.status.error(WEBSITE_REQUIRED);
            return None;
        }
        let request = CreateRecordRequest::new(website)
            .username(username.trim())
            .password(password);

        match self.api.create(&request).await {
            Ok(record) => {
                self.cache.put(record.clone());
                self.view.append(&record);
                self.status.success("Added");
                Some(record)
            }
            Err(e) => {
                self.report_failure(&e, "Add failed");
                None
            }
        }
    }

    /// Cached record for the edit form, or an error status if it is gone.
    pub fn edit_prefill(&mut self, id: &str) -> Option<Record> {
        let record = self.cache.get(id).cloned();
        if record.is_none() {
            self.status.error("Record not found");
        }
        record
    }

    /// Submit the edit form for `id`.
    pub async fn save_edit(
        &mut self,
        id: &str,
        website: &str,
        username: &str,
        password: &str,
    ) -> Option<Record> {
        let website = website.trim();
        if website.is_empty() {
            self.status.error(WEBSITE_REQUIRED);
            return None;
        }
        let request = UpdateRecordRequest {
            website: Some(website.to_string()),
            username: Some(username.trim().to_string()),
            password: Some(password.to_string()),
        };

        match self.api.update(id, &request).await {
            Ok(record) => {
                self.cache.put(record.clone());
                self.view.apply_update(&record);
                self.status.success("Saved");
                Some(record)
            }
            Err(e) => {
                self.report_failure(&e, "Save failed");
                None
            }
        }
    }

    /// Delete `id`; on success the cache entry and the row go together.
    pub async fn delete(&mut self, id: &str) -> bool {
        match self.api.delete(id).await {
            Ok(removed) => {
                log::debug!("Deleted record {}", removed.id);
                self.cache.remove(id);
                self.view.remove_row(id);
                self.status.success("Password deleted");
                true
            }
            Err(e) => {
                self.report_failure(&e, "Failed to delete");
                false
            }
        }
    }

    /// Show or mask a row's password. No request is made.
    pub fn toggle_reveal(&mut self, id: &str) -> Option<&Row> {
        self.view.toggle_reveal(&self.cache, id)
    }

    /// Highlight matching rows and report the count on the status line.
    pub fn search(&mut self, query: &str) -> SearchOutcome {
        let outcome = self.view.search(query);
        if query.trim().is_empty() {
            self.status.clear();
        } else {
            match outcome.matches {
                0 => self.status.set(StatusKind::Error, "No results"),
                1 => self.status.set(StatusKind::Success, "1 result"),
                n => self.status.set(StatusKind::Success, format!("{n} results")),
            }
        }
        outcome
    }

    fn report_failure(&mut self, err: &ClientError, fallback: &str) {
        log::warn!("{fallback}: {err}");
        self.status.error(err.server_code().unwrap_or(fallback));
    }
}
