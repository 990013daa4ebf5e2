//! PassVault client library
//!
//! - `RecordApi`: the four `/api/passwords` calls, with a reqwest implementation
//! - `ClientCache`: last-known record per id, kept in step with every successful mutation
//! - `RecordView`: rendered rows (mask/reveal, post-save update, search highlight)
//! - `StatusLine`: transient, auto-dismissing status message
//! - `VaultSession`: wires the above together per user action
//!
//! The cache holds plaintext passwords so that reveal needs no request.

pub mod api;
pub mod cache;
pub mod error;
pub mod session;
pub mod status;
pub mod view;

pub use api::{HttpRecordApi, RecordApi};
pub use cache::ClientCache;
pub use error::{ClientError, ClientResult};
pub use session::VaultSession;
pub use status::{StatusKind, StatusLine, StatusMessage};
pub use view::{MASK, NOT_FOUND_TEXT, RecordView, Row, SearchOutcome};
