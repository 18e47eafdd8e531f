//! Typed async client for a multi-service e-commerce backend.
//!
//! # Overview
//! Serializes requests to JSON, attaches a bearer token when one is stored,
//! and decodes JSON responses into domain types for users, profiles, shops,
//! products, carts and orders.
//!
//! # Design
//! - `Dispatcher` builds `HttpRequest` values and parses `HttpResponse`
//!   values without I/O; a `Transport` (by default `reqwest`) performs the
//!   round-trip in between.
//! - `ShopClient` exposes one method per backend endpoint, grouped by
//!   resource. Methods never retry, cache or validate locally.
//! - Configuration (base URL, token source) is passed in explicitly through
//!   `ClientConfig` rather than read from globals at call time.
//! - Any non-2xx status surfaces as `ApiError::RequestFailed` with the verb,
//!   path, status and raw body.

pub mod api;
pub mod client;
pub mod config;
pub mod currency;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod token;
pub mod transport;
pub mod types;

pub use client::ShopClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use currency::format_currency_inr;
pub use dispatcher::Dispatcher;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore, AUTH_TOKEN_KEY};
pub use transport::{ReqwestTransport, Transport};
pub use types::*;
