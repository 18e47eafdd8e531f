//! Error types for the shop API client.
//!
//! # Design
//! Every non-2xx response becomes `RequestFailed`, carrying the verb, path,
//! status and raw body so the message alone is enough to diagnose a failed
//! call. Transient transport failures and permanent HTTP failures are both
//! terminal for the call; nothing is retried.

use thiserror::Error;

use crate::http::HttpMethod;

/// Errors returned by the dispatcher and every facade method.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status outside the 2xx range.
    #[error("{method} {path} -> {status}: {body}")]
    RequestFailed {
        method: HttpMethod,
        path: String,
        status: u16,
        body: String,
    },

    /// A 2xx body could not be decoded into the declared response type, or a
    /// record was expected and the body was empty.
    #[error("{method} {path}: malformed response: {reason}")]
    MalformedResponse {
        method: HttpMethod,
        path: String,
        reason: String,
    },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The persisted token could not be written or cleared.
    #[error("token storage: {0}")]
    TokenStorage(#[from] std::io::Error),
}

impl ApiError {
    /// HTTP status of a `RequestFailed` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
