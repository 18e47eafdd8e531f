//! Client configuration.
//!
//! The base URL and the token source are fixed when the client is built and
//! never change afterwards. Nothing is read from ambient process state after
//! construction.

use std::sync::Arc;

use crate::token::{MemoryTokenStore, TokenStore};

/// Base URL used when `API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9100";

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    token_store: Arc<dyn TokenStore>,
}

impl ClientConfig {
    /// Configuration for `base_url` with no stored token.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token_store: Arc::new(MemoryTokenStore::new()),
        }
    }

    /// Reads the base URL from `API_BASE_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but against an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url.trim())
    }

    pub fn with_token_store(mut self, token_store: Arc<dyn TokenStore>) -> Self {
        self.token_store = token_store;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &dyn TokenStore {
        self.token_store.as_ref()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
