use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::CloudError;
use super::token::TokenPair;

/// Storage abstraction for the persisted token pair.
///
/// The session treats this as an external collaborator: `load` on an
/// empty store returns `Ok(None)`, never an error.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<TokenPair>, CloudError>;
    fn save(&self, tokens: &TokenPair) -> Result<(), CloudError>;
    fn clear(&self) -> Result<(), CloudError>;
}

/// File-backed token store holding a single versioned JSON record.
///
/// The on-disk format is a local cache, not a wire contract.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.lametric/cloud.json`.
    pub fn new_default() -> Self {
        Self {
            path: default_store_dir().join("cloud.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(path: &Path) -> Result<(), CloudError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<TokenPair>, CloudError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(CloudError::Io(err.to_string())),
        };
        let file: TokenFile = serde_json::from_str(&raw)?;
        Ok(Some(file.token))
    }

    fn save(&self, tokens: &TokenPair) -> Result<(), CloudError> {
        Self::ensure_parent(&self.path)?;
        let file = TokenFile {
            version: 1,
            token: tokens.clone(),
            saved_at: Utc::now(),
        };
        let serialized = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, serialized)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), CloudError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CloudError::Io(err.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenFile {
    version: u32,
    token: TokenPair,
    saved_at: DateTime<Utc>,
}

fn default_store_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".lametric"))
        .unwrap_or_else(|| PathBuf::from(".lametric"))
}
