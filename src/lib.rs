//! LaMetric Time client SDK.
//!
//! Two independent clients with no shared runtime:
//! [`cloud::CloudSession`] performs OAuth2 authorization-code and
//! refresh-token exchanges against the LaMetric developer cloud, lists
//! the user's devices, and persists tokens through a pluggable
//! [`cloud::TokenStore`]. [`device::DeviceSession`] talks directly to a
//! device's local HTTP API (Basic auth with the per-device API key) to
//! read device info and push notifications to the display.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use lametric::prelude::*;
//!
//! # async fn example() -> lametric::error::Result<()> {
//! let config = CloudConfig::from_env()?;
//! let mut cloud = CloudSession::new(config, Arc::new(FileTokenStore::new_default()));
//! cloud.restore_state()?;
//! let devices = cloud.get_devices().await?;
//!
//! let device = DeviceSession::new(&devices[0].ipv4_internal, &devices[0].api_key);
//! let notification = Notification::new(vec![Frame::with_icon("a2867", "WORKS!")])
//!     .with_sound(Sound::notification("positive1"));
//! device.send_notification(&notification).await?;
//! # Ok(())
//! # }
//! ```

pub mod cloud;
pub mod config;
pub mod device;
pub mod error;
pub mod prelude;

mod http;

#[cfg(feature = "cli")]
pub mod cli;
