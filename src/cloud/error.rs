use thiserror::Error;

use crate::http;

/// Errors from the LaMetric cloud and the token store.
#[derive(Debug, Error)]
pub enum CloudError {
    /// The cloud answered with a non-success status and a structured
    /// error body.
    #[error("{status}: {message}")]
    Api { status: u16, message: String },

    /// The host could not be reached at the transport level.
    #[error("Host is not reachable")]
    Unreachable,

    /// The response body was not the expected JSON shape.
    #[error("Unknown response format")]
    InvalidResponse,

    /// An access token is required before this call can be made.
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CloudError {
    /// HTTP status associated with this error; 0 when none is available.
    pub fn status(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            _ => 0,
        }
    }

    /// Map a non-success response body into `Api` when it carries the
    /// `{"errors":[{"message":...}]}` shape, `InvalidResponse` otherwise.
    pub(crate) fn from_error_body(status: u16, body: &str) -> Self {
        match http::first_error_message(body) {
            Some(message) => Self::Api { status, message },
            None => Self::InvalidResponse,
        }
    }
}

impl From<reqwest::Error> for CloudError {
    fn from(_: reqwest::Error) -> Self {
        Self::Unreachable
    }
}

impl From<std::io::Error> for CloudError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for CloudError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}
