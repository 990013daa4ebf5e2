//! Platform-agnostic storage adapters.

#[cfg(feature = "json-file-store")]
mod json_file_store;

#[cfg(feature = "json-file-store")]
pub use json_file_store::JsonFileRecordStore;
