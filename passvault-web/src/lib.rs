//! PassVault web frontend.
//!
//! Exposes the record store over a small JSON API with actix-web.

pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use passvault_app::adapters::JsonFileRecordStore;
use passvault_app::{AppState, AppStateBuilder};
use passvault_core::error::CoreResult;

use crate::config::StorageConfig;

/// Build the application state over the configured JSON file store.
pub fn build_state(storage: &StorageConfig) -> CoreResult<AppState> {
    AppStateBuilder::new()
        .record_store(Arc::new(JsonFileRecordStore::new(&storage.path)))
        .serialize_mutations(storage.serialize_mutations)
        .build()
}
