use thiserror::Error;

use crate::http;

/// Errors from a device's local HTTP API.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The device answered with a non-success status and a structured
    /// error body.
    #[error("{status}: {message}")]
    Api { status: u16, message: String },

    /// The device could not be reached at the transport level.
    #[error("Host is not reachable")]
    Unreachable,

    /// The response body was not the expected JSON shape.
    #[error("Unknown response format")]
    InvalidResponse,
}

impl DeviceError {
    /// HTTP status associated with this error; 0 when none is available.
    pub fn status(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            _ => 0,
        }
    }

    pub(crate) fn from_error_body(status: u16, body: &str) -> Self {
        match http::first_error_message(body) {
            Some(message) => Self::Api { status, message },
            None => Self::InvalidResponse,
        }
    }
}

impl From<reqwest::Error> for DeviceError {
    fn from(_: reqwest::Error) -> Self {
        Self::Unreachable
    }
}
