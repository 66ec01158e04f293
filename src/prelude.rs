//! Convenience re-exports for common use.

pub use crate::cloud::{CloudError, CloudSession, Device, FileTokenStore, TokenPair, TokenStore};
pub use crate::config::CloudConfig;
pub use crate::device::{DeviceError, DeviceSession, Frame, Notification, Priority, Sound};
pub use crate::error::{LaMetricError, Result};
