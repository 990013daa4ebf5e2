//! `/api/passwords` bindings
//!
//! `RecordApi` is the seam the session talks through; `HttpRecordApi` is the
//! reqwest implementation. Bodies are never logged since they carry passwords.

use async_trait::async_trait;
use passvault_core::types::{CreateRecordRequest, ErrorBody, Record, UpdateRecordRequest};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};

const API_PATH: &str = "/api/passwords";

/// Record API operations
#[async_trait]
pub trait RecordApi: Send + Sync {
    /// Fetch every record in store order
    async fn list(&self) -> ClientResult<Vec<Record>>;

    /// Create a record; the server assigns the id
    async fn create(&self, request: &CreateRecordRequest) -> ClientResult<Record>;

    /// Merge the provided fields into an existing record
    async fn update(&self, id: &str, request: &UpdateRecordRequest) -> ClientResult<Record>;

    /// Remove a record, returning what was removed
    async fn delete(&self, id: &str) -> ClientResult<Record>;
}

/// reqwest-backed `RecordApi`
#[derive(Debug, Clone)]
pub struct HttpRecordApi {
    client: Client,
    base_url: String,
}

impl HttpRecordApi {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{API_PATH}", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}{API_PATH}/{}", self.base_url, urlencoding::encode(id))
    }

    /// Send the request and decode a 2xx body as `T`.
    async fn execute<T>(builder: RequestBuilder, method: &str, url: &str) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        log::debug!("{method} {url}");

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to read response body: {e}")))?;

        log::debug!("{method} {url} -> {status} ({} bytes)", body.len());

        if !(200..300).contains(&status) {
            let err = api_error(status, &body);
            log::warn!("{method} {url} failed: {err}");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!("{method} {url}: unexpected response body: {e}");
            ClientError::Decode(e.to_string())
        })
    }
}

/// Build an `Api` error from a failed response, keeping the server's code when present.
fn api_error(status: u16, body: &str) -> ClientError {
    let code = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_default();
    ClientError::Api { status, code }
}

#[async_trait]
impl RecordApi for HttpRecordApi {
    async fn list(&self) -> ClientResult<Vec<Record>> {
        let url = self.collection_url();
        Self::execute(self.client.get(&url), "GET", &url).await
    }

    async fn create(&self, request: &CreateRecordRequest) -> ClientResult<Record> {
        let url = self.collection_url();
        Self::execute(self.client.post(&url).json(request), "POST", &url).await
    }

    async fn update(&self, id: &str, request: &UpdateRecordRequest) -> ClientResult<Record> {
        let url = self.record_url(id);
        Self::execute(self.client.put(&url).json(request), "PUT", &url).await
    }

    async fn delete(&self, id: &str) -> ClientResult<Record> {
        let url = self.record_url(id);
        Self::execute(self.client.delete(&url), "DELETE", &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_the_origin() {
        let api = HttpRecordApi::new("http://127.0.0.1:3000/");
        assert_eq!(api.base_url(), "http://127.0.0.1:3000");
        assert_eq!(api.collection_url(), "http://127.0.0.1:3000/api/passwords");
        assert_eq!(
            api.record_url("abc-123"),
            "http://127.0.0.1:3000/api/passwords/abc-123"
        );
    }

    #[test]
    fn record_ids_are_percent_encoded() {
        let api = HttpRecordApi::new("http://localhost");
        assert_eq!(
            api.record_url("a/b c"),
            "http://localhost/api/passwords/a%2Fb%20c"
        );
    }

    #[test]
    fn api_error_keeps_server_code() {
        assert_eq!(
            api_error(404, r#"{"error":"not found"}"#),
            ClientError::Api {
                status: 404,
                code: "not found".to_string()
            }
        );
        assert_eq!(
            api_error(502, "<html>Bad Gateway</html>"),
            ClientError::Api {
                status: 502,
                code: String::new()
            }
        );
    }
}
