//! Bearer token storage.
//!
//! The dispatcher only ever reads the token. Writing it (after a login) and
//! clearing it (on logout) is left to the application, through the concrete
//! store it handed to `ClientConfig`.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;

use crate::error::ApiError;

/// Key under which the token is persisted.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Source of the bearer token attached to outgoing requests.
pub trait TokenStore: Send + Sync + fmt::Debug {
    /// Current token, or `None` when requests should go unauthenticated.
    fn token(&self) -> Option<String>;
}

/// Token held in process memory.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn set(&self, token: impl Into<String>) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.into());
    }

    pub fn clear(&self) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        let slot = self.token.read().unwrap_or_else(|e| e.into_inner());
        slot.clone().filter(|t| !t.is_empty())
    }
}

/// Token persisted in a JSON object file, the on-disk analogue of browser
/// local storage. Other keys in the file are left untouched.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set(&self, token: &str) -> Result<(), ApiError> {
        let mut entries = self.load()?;
        entries.insert(AUTH_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.save(&entries)
    }

    pub fn clear(&self) -> Result<(), ApiError> {
        let mut entries = self.load()?;
        if entries.remove(AUTH_TOKEN_KEY).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<String, Value>, ApiError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw)
            .map_err(|e| ApiError::TokenStorage(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn save(&self, entries: &BTreeMap<String, Value>) -> Result<(), ApiError> {
        let raw = serde_json::to_string_pretty(entries).map_err(ApiError::Serialization)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        match self.load() {
            Ok(entries) => match entries.get(AUTH_TOKEN_KEY) {
                Some(Value::String(token)) if !token.is_empty() => Some(token.clone()),
                _ => None,
            },
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable token file");
                None
            }
        }
    }
}
