//! Request construction, dispatch and response parsing.
//!
//! # Design
//! `build_request` and `parse_response` are pure: one turns a call into an
//! `HttpRequest`, the other turns an `HttpResponse` into a typed value or an
//! `ApiError`. `request` glues them to a `Transport`. Every facade method is a
//! single call through here.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";

#[derive(Debug, Clone)]
pub struct Dispatcher<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl Dispatcher<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request for `method path`.
    ///
    /// Header order: `Content-Type: application/json`, then `extra_headers`
    /// (replacing a same-named header), then `Authorization` when the token
    /// store has a token.
    pub fn build_request<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        extra_headers: &[(&str, &str)],
    ) -> Result<HttpRequest, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut headers = vec![(CONTENT_TYPE.to_string(), "application/json".to_string())];
        for (name, value) in extra_headers {
            set_header(&mut headers, name, value);
        }
        if let Some(token) = self.config.token_store().token() {
            set_header(&mut headers, AUTHORIZATION, &format!("Bearer {token}"));
        }

        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(ApiError::Serialization)?;

        Ok(HttpRequest {
            method,
            path: path.to_string(),
            url: format!("{}{path}", self.config.base_url()),
            headers,
            body,
        })
    }

    /// Interpret a response to `method path`.
    ///
    /// An empty 2xx body yields `None`.
    pub fn parse_response<R>(
        &self,
        method: HttpMethod,
        path: &str,
        response: HttpResponse,
    ) -> Result<Option<R>, ApiError>
    where
        R: DeserializeOwned,
    {
        if !response.is_success() {
            return Err(ApiError::RequestFailed {
                method,
                path: path.to_string(),
                status: response.status,
                body: response.body,
            });
        }
        if response.body.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|e| ApiError::MalformedResponse {
                method,
                path: path.to_string(),
                reason: e.to_string(),
            })
    }

    /// Perform one call and return the decoded body, if any.
    pub async fn request<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        extra_headers: &[(&str, &str)],
    ) -> Result<Option<R>, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.build_request(method, path, body, extra_headers)?;
        tracing::debug!(%method, path, has_body = request.body.is_some(), "dispatching request");

        let result = match self.transport.execute(request).await {
            Ok(response) => self.parse_response(method, path, response),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            tracing::warn!(%method, path, error = %e, "request failed");
        }
        result
    }

    pub(crate) async fn get<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let body = self.request::<(), R>(HttpMethod::Get, path, None, &[]).await?;
        require_body(HttpMethod::Get, path, body)
    }

    pub(crate) async fn send<B, R>(&self, method: HttpMethod, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.request(method, path, Some(body), &[]).await?;
        require_body(method, path, response)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request::<(), IgnoredAny>(HttpMethod::Delete, path, None, &[])
            .await
            .map(|_| ())
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
        Some(slot) => *slot = (name.to_string(), value.to_string()),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

fn require_body<R>(method: HttpMethod, path: &str, body: Option<R>) -> Result<R, ApiError> {
    body.ok_or_else(|| ApiError::MalformedResponse {
        method,
        path: path.to_string(),
        reason: "expected a response body, got none".to_string(),
    })
}
