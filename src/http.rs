//! Shared HTTP client and error-body helpers.

use std::sync::OnceLock;

use serde::Deserialize;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub(crate) fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client")
    })
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// First `errors[].message` from a `{"errors":[{"message":...}]}` body,
/// if the body has that shape.
pub(crate) fn first_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.errors.into_iter().next().map(|entry| entry.message)
}
