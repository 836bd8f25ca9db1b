//! HTTP client for the marketplace backend
//!
//! Thin wrapper around [`reqwest::Client`] that:
//! - resolves paths against the configured base URL
//! - attaches `Accept: application/json` and the shared bearer credential
//! - maps non-2xx responses into [`HttpError`], decoding 422 payloads
//!   into [`ValidationErrors`]

use std::collections::BTreeMap;
use std::fmt;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::credential::Credential;

/// HTTP result type alias
pub type HttpResult<T> = Result<T, HttpError>;

// ============================================================================
// Validation payload
// ============================================================================

/// Field errors returned by the backend with HTTP 422
///
/// Shape: `{"message": "...", "errors": {"email": ["..."]}}`.
/// Carried to callers exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// First message for a field, as shown next to the input
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.get(field).is_some_and(|m| !m.is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str("The given data was invalid."),
        }
    }
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

// ============================================================================
// Error Types
// ============================================================================

/// HTTP-level errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// 422 with a field error payload
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Any other non-2xx response
    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// Connection, TLS or protocol failure
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// 2xx response whose body did not match the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// Base URL and path did not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    /// Build from a non-2xx status and its raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == StatusCode::UNPROCESSABLE_ENTITY.as_u16() {
            return HttpError::Validation(serde_json::from_str(body).unwrap_or_default());
        }

        let message = serde_json::from_str::<MessageBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .or_else(|| {
                StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Request failed".to_string());

        HttpError::Status { status, message }
    }

    /// HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Validation(_) => Some(StatusCode::UNPROCESSABLE_ENTITY.as_u16()),
            HttpError::Status { status, .. } => Some(*status),
            HttpError::Transport(e) => e.status().map(|s| s.as_u16()),
            HttpError::Decode(_) | HttpError::InvalidUrl(_) => None,
        }
    }

    /// Field errors, if this is a 422
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            HttpError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HttpError::Validation(_) => ErrorKind::UnprocessableEntity,
            HttpError::Status { status, .. } => ErrorKind::from_status(*status),
            HttpError::Transport(e) if e.is_timeout() => ErrorKind::RequestTimeout,
            HttpError::Transport(_) => ErrorKind::Network,
            HttpError::Decode(_) | HttpError::InvalidUrl(_) => ErrorKind::Internal,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            HttpError::Transport(e) => {
                tracing::error!(error = %e, "HTTP transport error");
            }
            HttpError::Decode(msg) | HttpError::InvalidUrl(msg) => {
                tracing::error!(message = %msg, "HTTP client error");
            }
            HttpError::Status { status, message } if *status >= 500 => {
                tracing::error!(status, message = %message, "Backend error");
            }
            HttpError::Status { status, message } => {
                tracing::warn!(status, message = %message, "Request rejected");
            }
            HttpError::Validation(errors) => {
                tracing::debug!(fields = ?errors.errors.keys().collect::<Vec<_>>(), "Validation failed");
            }
        }
    }
}

impl From<HttpError> for AppError {
    fn from(err: HttpError) -> Self {
        err.log();
        let kind = err.kind();
        let message = match err {
            HttpError::Transport(e) => return e.into(),
            HttpError::Validation(ref errors) => errors.to_string(),
            HttpError::Status { ref message, .. } => message.clone(),
            ref other => other.to_string(),
        };
        AppError::new(kind, message).with_source(err)
    }
}

// ============================================================================
// Client
// ============================================================================

/// JSON API client bound to one base URL and the shared credential slot
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credential: Credential) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, credential)
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        credential: Credential,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            credential,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The slot every request reads its bearer token from
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Resolve a path (and optional query pairs) against the base URL
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> HttpResult<Url> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| HttpError::InvalidUrl(format!("{raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().copied());
        }
        Ok(url)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> HttpResult<T> {
        let response = self.send::<()>(Method::GET, path, query, None).await?;
        decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, query: &[(&str, &str)], body: &B) -> HttpResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, query, Some(body)).await?;
        decode(response).await
    }

    /// POST whose response body is irrelevant to the caller
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> HttpResult<()> {
        self.send(Method::POST, path, &[], Some(body)).await?;
        Ok(())
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> HttpResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PATCH, path, &[], Some(body)).await?;
        decode(response).await
    }

    pub async fn delete(&self, path: &str, query: &[(&str, &str)]) -> HttpResult<()> {
        self.send::<()>(Method::DELETE, path, query, None).await?;
        Ok(())
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> HttpResult<reqwest::Response> {
        let url = self.url(path, query)?;
        tracing::debug!(method = %method, path = url.path(), "Sending API request");

        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json");
        if let Some(value) = self.credential.header_value().await {
            request = request.header(AUTHORIZATION, value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(HttpError::Transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(HttpError::from_response(status.as_u16(), &body))
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> HttpResult<T> {
    let bytes = response.bytes().await.map_err(HttpError::Transport)?;
    serde_json::from_slice(&bytes).map_err(|e| HttpError::Decode(e.to_string()))
}
