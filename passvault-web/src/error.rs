//! HTTP error mapping: wraps `CoreError`

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use passvault_core::error::CoreError;
use passvault_core::types::ErrorBody;

/// API error: directly wraps `CoreError`
#[derive(Debug)]
pub struct ApiError(pub CoreError);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_expected() {
            tracing::warn!("ApiError: {err}");
        } else {
            tracing::error!("ApiError: {err}");
        }
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            CoreError::ValidationError(_) | CoreError::MalformedRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            CoreError::RecordNotFound(_) => StatusCode::NOT_FOUND,
            CoreError::PersistenceFailure(_) | CoreError::SerializationError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::from(&self.0))
    }
}
