//! LaMetric Cloud: OAuth2 token lifecycle, device listing, persistence.

pub mod devices;
pub mod error;
pub mod session;
pub mod store;
pub mod token;

pub use devices::Device;
pub use error::CloudError;
pub use session::CloudSession;
pub use store::{FileTokenStore, TokenStore};
pub use token::TokenPair;
