//! Local device API: info queries and notification push.

pub mod error;
pub mod notification;
pub mod session;

pub use error::DeviceError;
pub use notification::{Frame, Notification, Priority, Sound};
pub use session::DeviceSession;
