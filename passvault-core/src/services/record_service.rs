//! Record CRUD service
//!
//! Every operation loads the full snapshot from the store; every mutation
//! rewrites the full snapshot. No record state is kept between calls.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{CreateRecordRequest, Record, UpdateRecordRequest};

/// Record CRUD service
pub struct RecordService {
    ctx: Arc<ServiceContext>,
}

impl RecordService {
    /// Create a record service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Service context
    #[must_use]
    pub fn ctx(&self) -> &Arc<ServiceContext> {
        &self.ctx
    }

    // ===== Queries =====

    /// List all records in stored order
    pub async fn list_records(&self) -> Vec<Record> {
        self.ctx.record_store().load().await
    }

    /// Get record by ID
    pub async fn get_record(&self, id: &str) -> Option<Record> {
        self.list_records().await.into_iter().find(|r| r.id == id)
    }

    // ===== Mutations =====

    /// Create a record
    ///
    /// `website` is required; `username` and `password` default to empty.
    /// The store assigns an id distinct from every id currently persisted.
    pub async fn create_record(&self, request: CreateRecordRequest) -> CoreResult<Record> {
        let website = request
            .website
            .filter(|w| !w.is_empty())
            .ok_or_else(|| CoreError::ValidationError("website is required".to_string()))?;

        let _guard = self.ctx.begin_mutation().await;
        let mut records = self.ctx.record_store().load().await;

        let record = Record {
            id: self.ctx.id_generator().next_unique(&records),
            website,
            username: request.username.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
        };
        records.push(record.clone());

        self.ctx.record_store().replace(&records).await?;
        log::info!("Record created: {}", record.id);
        Ok(record)
    }

    /// Update a record
    ///
    /// Fields absent from the request keep their prior value. An empty
    /// `website` is rejected and leaves the stored record unchanged.
    pub async fn update_record(&self, id: &str, request: UpdateRecordRequest) -> CoreResult<Record> {
        let _guard = self.ctx.begin_mutation().await;
        let mut records = self.ctx.record_store().load().await;

        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;

        if request.website.as_deref() == Some("") {
            return Err(CoreError::ValidationError(
                "website cannot be empty".to_string(),
            ));
        }

        request.apply_to(record);
        let updated = record.clone();

        self.ctx.record_store().replace(&records).await?;
        log::info!("Record updated: {id}");
        Ok(updated)
    }

    /// Delete a record, returning the removed record
    pub async fn delete_record(&self, id: &str) -> CoreResult<Record> {
        let _guard = self.ctx.begin_mutation().await;
        let mut records = self.ctx.record_store().load().await;

        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        let removed = records.remove(index);

        self.ctx.record_store().replace(&records).await?;
        log::info!("Record deleted: {id}");
        Ok(removed)
    }
}
