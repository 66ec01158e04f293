use serde::{Deserialize, Serialize};

/// OAuth access/refresh token pair issued by the cloud.
///
/// A session holds `Option<TokenPair>`, so tokens are always both
/// present or both absent; a successful exchange replaces the pair
/// as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}
