//! `/api/passwords` handlers
//!
//! | Method | Path                  | Success                |
//! |--------|-----------------------|------------------------|
//! | GET    | `/api/passwords`      | 200, array of records  |
//! | POST   | `/api/passwords`      | 201, created record    |
//! | PUT    | `/api/passwords/{id}` | 200, updated record    |
//! | DELETE | `/api/passwords/{id}` | 200, removed record    |
//!
//! Any other method under `/api/passwords` answers 405.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use passvault_app::AppState;
use passvault_core::error::CoreError;
use passvault_core::types::{CreateRecordRequest, ErrorBody, UpdateRecordRequest};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing_attributes::instrument;

use crate::error::ApiError;

pub const API_PREFIX: &str = "/api/passwords";

/// Register the API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(API_PREFIX)
            .route(web::get().to(list_records))
            .route(web::post().to(create_record))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource(format!("{API_PREFIX}/{{id}}"))
            .route(web::put().to(update_record))
            .route(web::delete().to(delete_record))
            .default_service(web::to(method_not_allowed)),
    )
    .service(web::scope(API_PREFIX).default_service(web::to(method_not_allowed)));
}

/// Fallback for paths outside the API.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain")
        .body("Not found")
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorBody::new("method not allowed"))
}

#[instrument(skip_all)]
async fn list_records(state: web::Data<AppState>) -> HttpResponse {
    let records = state.record_service.list_records().await;
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(records)
}

#[instrument(skip_all)]
async fn create_record(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let value = parse_json(&body)?;
    if !value.is_object() {
        return Err(CoreError::ValidationError("website is required".to_string()).into());
    }
    let request: CreateRecordRequest = from_value(value)?;

    let record = state.record_service.create_record(request).await?;
    Ok(HttpResponse::Created().json(record))
}

#[instrument(skip_all, fields(id = %id))]
async fn update_record(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let value = parse_json(&body)?;
    let request: UpdateRecordRequest = match value {
        Value::Null => UpdateRecordRequest::default(),
        Value::Object(_) => from_value(value)?,
        _ => {
            return Err(
                CoreError::MalformedRequest("expected a JSON object".to_string()).into(),
            );
        }
    };

    let record = state.record_service.update_record(&id, request).await?;
    Ok(HttpResponse::Ok().json(record))
}

#[instrument(skip_all, fields(id = %id))]
async fn delete_record(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let removed = state.record_service.delete_record(&id).await?;
    Ok(HttpResponse::Ok().json(removed))
}

fn parse_json(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|e| CoreError::MalformedRequest(e.to_string()).into())
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| CoreError::MalformedRequest(e.to_string()).into())
}
