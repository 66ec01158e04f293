//! Crate-level error type wrapping the two remote-system error kinds.

use thiserror::Error;

use crate::cloud::CloudError;
use crate::device::DeviceError;

/// Primary error type for callers that talk to both the cloud and a device.
///
/// Library methods return the component-specific [`CloudError`] or
/// [`DeviceError`] directly; this wrapper exists for callers (like the
/// CLI) that mix both plus configuration loading.
#[derive(Debug, Error)]
pub enum LaMetricError {
    #[error("LaMetric Cloud error: {0}")]
    Cloud(#[from] CloudError),

    #[error("LaMetric Device error: {0}")]
    Device(#[from] DeviceError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, LaMetricError>;
