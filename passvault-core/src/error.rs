//! Unified error type definition

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// A required field is missing or empty
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Record not found
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Request payload could not be parsed
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Store read/write failure
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) | Self::RecordNotFound(_) | Self::MalformedRequest(_) => true,
            Self::PersistenceFailure(_) | Self::SerializationError(_) => false,
        }
    }

    /// Machine-readable code sent to clients in `{"error": <code>}` bodies.
    #[must_use]
    pub fn wire_code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "invalid",
            Self::RecordNotFound(_) => "not found",
            Self::MalformedRequest(_) => "bad json",
            Self::PersistenceFailure(_) | Self::SerializationError(_) => "storage failure",
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
