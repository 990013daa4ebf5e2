//! Platform-agnostic application bootstrap for PassVault.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter injection)
//! and the storage adapters frontends plug into it.

pub mod adapters;

use std::sync::Arc;

use passvault_core::error::{CoreError, CoreResult};
use passvault_core::services::{RecordService, ServiceContext};
use passvault_core::traits::RecordStore;
use passvault_core::utils::IdGenerator;

/// Platform-agnostic application state.
///
/// Holds all services and the `ServiceContext`. Every frontend constructs this
/// once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds the storage adapter)
    pub ctx: Arc<ServiceContext>,
    /// Record service
    pub record_service: Arc<RecordService>,
}

impl AppState {
    /// Log a summary of the store the app starts with.
    ///
    /// Never fails: an unreadable store is reported as empty.
    pub async fn run_startup(&self) {
        let records = self.record_service.list_records().await;
        log::info!("Record store ready: {} records", records.len());
        if self.ctx.serializes_mutations() {
            log::info!("Mutations are serialized through a single-writer lock");
        } else {
            log::info!("Mutations are not serialized; concurrent writes are last-writer-wins");
        }
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `record_store`: how records are persisted
///
/// # Optional
/// - `serialize_mutations`: defaults to `false`
/// - `id_generator`: defaults to random UUID v4 ids
#[derive(Default)]
pub struct AppStateBuilder {
    record_store: Option<Arc<dyn RecordStore>>,
    serialize_mutations: bool,
    id_generator: Option<IdGenerator>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn record_store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.record_store = Some(store);
        self
    }

    #[must_use]
    pub fn serialize_mutations(mut self, enabled: bool) -> Self {
        self.serialize_mutations = enabled;
        self
    }

    #[must_use]
    pub fn id_generator(mut self, id_generator: IdGenerator) -> Self {
        self.id_generator = Some(id_generator);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let record_store = self
            .record_store
            .ok_or_else(|| CoreError::ValidationError("record_store is required".to_string()))?;

        let mut ctx = ServiceContext::new(record_store);
        if self.serialize_mutations {
            ctx = ctx.with_serialized_mutations();
        }
        if let Some(id_generator) = self.id_generator {
            ctx = ctx.with_id_generator(id_generator);
        }
        let ctx = Arc::new(ctx);

        let record_service = Arc::new(RecordService::new(Arc::clone(&ctx)));

        Ok(AppState {
            ctx,
            record_service,
        })
    }
}
