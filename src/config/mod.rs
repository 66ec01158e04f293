//! Cloud application credentials and OAuth settings.

use crate::error::{LaMetricError, Result};

/// Redirect URI registered for the example application.
pub const DEFAULT_REDIRECT_URI: &str = "http://lametric.com/redirect";

/// Scopes requested during authorization.
pub const DEFAULT_SCOPES: &[&str] = &["basic", "devices_read"];

/// Credentials and OAuth settings for a LaMetric cloud application.
///
/// Passed explicitly to [`crate::cloud::CloudSession::new`]; there is no
/// global credential state.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
}

impl CloudConfig {
    /// Create a config with the default redirect URI and scopes.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = redirect_uri.into();
        self
    }

    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Load credentials from the environment (`.env` is read first if present).
    ///
    /// Requires `LAMETRIC_CLIENT_ID` and `LAMETRIC_CLIENT_SECRET`;
    /// `LAMETRIC_REDIRECT_URI` optionally overrides the default.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let client_id = std::env::var("LAMETRIC_CLIENT_ID").map_err(|_| {
            LaMetricError::Configuration("LAMETRIC_CLIENT_ID is not set".to_string())
        })?;
        let client_secret = std::env::var("LAMETRIC_CLIENT_SECRET").map_err(|_| {
            LaMetricError::Configuration("LAMETRIC_CLIENT_SECRET is not set".to_string())
        })?;

        let mut config = Self::new(client_id, client_secret);
        if let Ok(redirect_uri) = std::env::var("LAMETRIC_REDIRECT_URI") {
            config.redirect_uri = redirect_uri;
        }
        Ok(config)
    }

    /// Scopes joined the way the authorize endpoint expects them.
    pub(crate) fn scope_string(&self) -> String {
        self.scopes.join("+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_default_redirect_and_scopes() {
        let config = CloudConfig::new("id-1", "secret-1");
        assert_eq!(config.client_id, "id-1");
        assert_eq!(config.client_secret, "secret-1");
        assert_eq!(config.redirect_uri, DEFAULT_REDIRECT_URI);
        assert_eq!(config.scopes, vec!["basic", "devices_read"]);
    }

    #[test]
    fn scope_string_joins_with_plus() {
        let config = CloudConfig::new("id", "secret");
        assert_eq!(config.scope_string(), "basic+devices_read");
    }

    #[test]
    fn builders_override_defaults() {
        let config = CloudConfig::new("id", "secret")
            .with_redirect_uri("http://localhost:9000/callback")
            .with_scopes(vec!["basic".to_string()]);
        assert_eq!(config.redirect_uri, "http://localhost:9000/callback");
        assert_eq!(config.scope_string(), "basic");
    }
}
