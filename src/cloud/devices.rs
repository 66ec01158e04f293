use serde::{Deserialize, Serialize};

/// One device record from the cloud's device-listing endpoint.
///
/// Only the fields the SDK itself needs are typed; everything else the
/// cloud returns (serial number, OS version, ...) is kept raw in
/// `extra` without normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub wifi_ssid: String,
    pub ipv4_internal: String,
    pub api_key: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
