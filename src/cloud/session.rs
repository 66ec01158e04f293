use std::sync::Arc;

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::config::CloudConfig;
use crate::http::shared_client;

use super::devices::Device;
use super::error::CloudError;
use super::store::TokenStore;
use super::token::TokenPair;

const DEFAULT_AUTHORIZE_URL: &str = "https://developer.lametric.com/api/v2/oauth2/authorize";
const DEFAULT_TOKEN_URL: &str = "https://developer.lametric.com/api/v2/oauth2/token";
const DEFAULT_DEVICES_URL: &str = "https://developer.lametric.com/api/v2/users/me/devices";

/// OAuth2 session against the LaMetric developer cloud.
///
/// Unauthenticated until [`authenticate`](Self::authenticate) completes a
/// code exchange (or [`restore_state`](Self::restore_state) finds a saved
/// pair); [`refresh_token`](Self::refresh_token) rotates both tokens in
/// place. Each method issues at most one outbound request.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use lametric::cloud::{CloudSession, FileTokenStore};
/// use lametric::config::CloudConfig;
///
/// let config = CloudConfig::new("client-id", "client-secret");
/// let session = CloudSession::new(config, Arc::new(FileTokenStore::new_default()));
/// println!("authorize at: {}", session.authentication_url());
/// ```
pub struct CloudSession {
    client: reqwest::Client,
    config: CloudConfig,
    authorize_url: String,
    token_url: String,
    devices_url: String,
    tokens: Option<TokenPair>,
    store: Arc<dyn TokenStore>,
}

impl CloudSession {
    pub fn new(config: CloudConfig, store: Arc<dyn TokenStore>) -> Self {
        Self {
            client: shared_client().clone(),
            config,
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            devices_url: DEFAULT_DEVICES_URL.to_string(),
            tokens: None,
            store,
        }
    }

    pub fn with_authorize_url(mut self, url: impl Into<String>) -> Self {
        self.authorize_url = url.into();
        self
    }

    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    pub fn with_devices_url(mut self, url: impl Into<String>) -> Self {
        self.devices_url = url.into();
        self
    }

    /// Authorization-request URL the user must visit to obtain a code.
    pub fn authentication_url(&self) -> String {
        format!(
            "{}?response_type=code&client_id={}&scope={}&redirect_uri={}",
            self.authorize_url,
            self.config.client_id,
            self.config.scope_string(),
            self.config.redirect_uri,
        )
    }

    /// Exchange an authorization code for an access/refresh token pair.
    ///
    /// A no-op when the session already holds tokens.
    pub async fn authenticate(&mut self, code: &str) -> Result<(), CloudError> {
        if self.tokens.is_some() {
            return Ok(());
        }
        let form = [
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
        ];
        let tokens = self.token_exchange(&form).await?;
        self.tokens = Some(tokens);
        Ok(())
    }

    /// Rotate the token pair using the held refresh token.
    ///
    /// A no-op when the session holds no tokens.
    pub async fn refresh_token(&mut self) -> Result<(), CloudError> {
        let Some(current) = self.tokens.clone() else {
            return Ok(());
        };
        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("refresh_token", current.refresh_token.as_str()),
        ];
        let tokens = self.token_exchange(&form).await?;
        self.tokens = Some(tokens);
        Ok(())
    }

    pub fn has_refresh_token(&self) -> bool {
        self.tokens.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|pair| pair.access_token.as_str())
    }

    /// List the devices registered to the authenticated user.
    pub async fn get_devices(&self) -> Result<Vec<Device>, CloudError> {
        let Some(tokens) = &self.tokens else {
            return Err(CloudError::NotAuthenticated);
        };
        debug!(url = %self.devices_url, "listing devices");
        let response = self
            .client
            .get(&self.devices_url)
            .header(ACCEPT, "application/json")
            .bearer_auth(&tokens.access_token)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(CloudError::from_error_body(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|_| CloudError::InvalidResponse)
    }

    /// Persist the current token pair; clears the record when the
    /// session holds none, so the store never sees a partial state.
    pub fn save_state(&self) -> Result<(), CloudError> {
        match &self.tokens {
            Some(tokens) => self.store.save(tokens),
            None => self.store.clear(),
        }
    }

    /// Restore a previously saved token pair.
    ///
    /// Leaves the session unchanged when the store has no record.
    pub fn restore_state(&mut self) -> Result<(), CloudError> {
        if let Some(tokens) = self.store.load()? {
            self.tokens = Some(tokens);
        }
        Ok(())
    }

    async fn token_exchange(&self, form: &[(&str, &str)]) -> Result<TokenPair, CloudError> {
        debug!(url = %self.token_url, grant_type = form[0].1, "token exchange");
        let response = self
            .client
            .post(&self.token_url)
            .header(ACCEPT, "application/json")
            .form(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(CloudError::from_error_body(status.as_u16(), &body));
        }
        let payload: TokenResponse =
            serde_json::from_str(&body).map_err(|_| CloudError::InvalidResponse)?;
        Ok(TokenPair {
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::store::FileTokenStore;
    use tempfile::TempDir;

    fn temp_session(config: CloudConfig) -> (TempDir, CloudSession) {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileTokenStore::new(dir.path().join("cloud.json")));
        (dir, CloudSession::new(config, store))
    }

    #[test]
    fn authentication_url_has_fixed_scope_and_redirect() {
        let (_dir, session) = temp_session(CloudConfig::new("id-1", "secret-1"));
        assert_eq!(
            session.authentication_url(),
            "https://developer.lametric.com/api/v2/oauth2/authorize\
             ?response_type=code&client_id=id-1&scope=basic+devices_read\
             &redirect_uri=http://lametric.com/redirect"
        );
    }

    #[test]
    fn authentication_url_respects_overrides() {
        let config = CloudConfig::new("id-1", "secret-1")
            .with_redirect_uri("http://localhost:8000/cb")
            .with_scopes(vec!["basic".to_string()]);
        let (_dir, session) = temp_session(config);
        let session = session.with_authorize_url("http://localhost:9999/authorize");
        assert_eq!(
            session.authentication_url(),
            "http://localhost:9999/authorize?response_type=code&client_id=id-1\
             &scope=basic&redirect_uri=http://localhost:8000/cb"
        );
    }

    #[test]
    fn fresh_session_holds_no_tokens() {
        let (_dir, session) = temp_session(CloudConfig::new("id", "secret"));
        assert!(!session.has_refresh_token());
        assert!(session.access_token().is_none());
    }
}
