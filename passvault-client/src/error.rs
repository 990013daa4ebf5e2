//! Client error types

use thiserror::Error;

/// Client-side error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {code}")]
    Api {
        status: u16,
        /// `error` field of the response body, empty if the body had none
        code: String,
    },

    /// Request could not be sent or the response could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// 2xx response whose body is not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Machine-readable code reported by the server, if any.
    #[must_use]
    pub fn server_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } if !code.is_empty() => Some(code),
            _ => None,
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
