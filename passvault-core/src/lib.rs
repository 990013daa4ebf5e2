//! PassVault Core Library
//!
//! Provides the core logic of the credential manager:
//! - Record model and request types
//! - Record CRUD service (always reload, always rewrite the whole snapshot)
//! - Storage abstraction (`RecordStore`)
//!
//! This library is platform-independent; persistence is injected through traits.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{RecordService, ServiceContext};
pub use traits::{InMemoryRecordStore, RecordStore};
pub use types::{CreateRecordRequest, ErrorBody, Record, UpdateRecordRequest};
