use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use tracing::debug;

use crate::http::shared_client;

use super::error::DeviceError;
use super::notification::Notification;

const DEFAULT_PORT: u16 = 8080;
const API_PATH: &str = "/api/v2";
const DEVICE_PATH: &str = "/api/v2/device";
const NOTIFICATIONS_PATH: &str = "/api/v2/device/notifications";
const BASIC_AUTH_USER: &str = "dev";

/// Client for a device's local HTTP API.
///
/// Bound at construction to a device address and its API key (both come
/// from [`crate::cloud::CloudSession::get_devices`]); every call
/// authenticates with HTTP Basic auth as `dev:<api_key>`. Stateless
/// between calls, no retries.
///
/// # Example
/// ```no_run
/// use lametric::device::{DeviceSession, Frame, Notification};
///
/// # async fn example() -> Result<(), lametric::device::DeviceError> {
/// let session = DeviceSession::new("192.168.1.50", "device-api-key");
/// session
///     .send_notification(&Notification::new(vec![Frame::with_icon("a2867", "WORKS!")]))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct DeviceSession {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DeviceSession {
    pub fn new(ip: &str, api_key: impl Into<String>) -> Self {
        Self {
            client: shared_client().clone(),
            base_url: format!("http://{ip}:{DEFAULT_PORT}"),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch the device's API description (`/api/v2`).
    pub async fn get_api_info(&self) -> Result<serde_json::Value, DeviceError> {
        self.get(API_PATH).await
    }

    /// Fetch the device record (`/api/v2/device`).
    pub async fn get_device_info(&self) -> Result<serde_json::Value, DeviceError> {
        self.get(DEVICE_PATH).await
    }

    /// Push a notification to the device's display.
    ///
    /// The device acknowledges with 200 or 201; both are success.
    pub async fn send_notification(
        &self,
        notification: &Notification,
    ) -> Result<serde_json::Value, DeviceError> {
        let url = format!("{}{}", self.base_url, NOTIFICATIONS_PATH);
        debug!(%url, frames = notification.frames.len(), "sending notification");
        let response = self
            .client
            .post(&url)
            .basic_auth(BASIC_AUTH_USER, Some(&self.api_key))
            .header(ACCEPT, "application/json")
            .json(&notification.payload())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(DeviceError::from_error_body(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|_| DeviceError::InvalidResponse)
    }

    async fn get(&self, path: &str) -> Result<serde_json::Value, DeviceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "device GET");
        let response = self
            .client
            .get(&url)
            .basic_auth(BASIC_AUTH_USER, Some(&self.api_key))
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(DeviceError::from_error_body(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|_| DeviceError::InvalidResponse)
    }
}
