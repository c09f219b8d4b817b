//! HTTP client for the MockFactory backend.
//!
//! Wraps the JSON-over-HTTPS exchange behind typed methods: code execution,
//! authentication, and usage queries. Every call is a single attempt (no
//! retry or backoff); the stored session token, when present, is attached as
//! a bearer credential.
//!
//! # Example
//!
//! ```rust,no_run
//! use mockfactory_client::{ApiClient, ExecutionRequest, Language};
//!
//! # async fn example() -> Result<(), mockfactory_client::ApiError> {
//! let client = ApiClient::new("https://mockfactory.io", 30, None, None)?;
//! let result = client
//!     .execute(&ExecutionRequest {
//!         language: Language::Python,
//!         code: "print('hi')".into(),
//!         timeout: None,
//!     })
//!     .await?;
//! println!("{}", result.stdout);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

pub use error::ApiError;
pub use types::{
    ExecutionRequest, ExecutionResult, Language, Profile, Tier, UnsupportedLanguage, UsageSnapshot,
};

/// Path prefix for all backend endpoints.
const API_PREFIX: &str = "/api/v1";

/// Typed client for the MockFactory backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u32,
    token: Option<String>,
    session_id: Option<String>,
}

/// Token payload returned by the auth endpoints.
#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ApiClient {
    /// Build a client for `base_url` with the given request timeout.
    ///
    /// `token` is attached as `Authorization: Bearer` on every request when
    /// present; `session_id` as `X-Session-Id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout_secs: u32,
        token: Option<String>,
        session_id: Option<String>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(timeout_secs)))
            .build()
            .map_err(|e| ApiError::Protocol(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs,
            token,
            session_id,
        })
    }

    /// Configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Same client with a different bearer token attached.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Whether a session token is attached to requests.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Execute code in the backend sandbox.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] describing the failure kind.
    pub async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, ApiError> {
        debug!(language = %request.language, timeout = ?request.timeout, "submitting execution");
        let body = serde_json::to_value(request)
            .map_err(|e| ApiError::Protocol(format!("failed to encode request: {e}")))?;
        self.request(Method::POST, "/code/execute", Some(body)).await
    }

    /// Sign in and return the bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] on rejected credentials.
    pub async fn signin(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response: TokenResponse = self
            .request(Method::POST, "/auth/signin", Some(body))
            .await?;
        Ok(response.access_token)
    }

    /// Create an account and return the bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the backend rejects the profile.
    pub async fn signup(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response: TokenResponse = self
            .request(Method::POST, "/auth/signup", Some(body))
            .await?;
        Ok(response.access_token)
    }

    /// Fetch the authenticated account's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] when no valid session is attached.
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.request(Method::GET, "/auth/me", None).await
    }

    /// Fetch current usage counters.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] describing the failure kind.
    pub async fn usage(&self) -> Result<UsageSnapshot, ApiError> {
        self.request(Method::GET, "/code/usage", None).await
    }

    /// Perform one request and normalize the outcome.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}{}", self.base_url, API_PREFIX, path);
        trace!(%method, %url, "sending request");

        let mut builder = self.http.request(method, &url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(session_id) = &self.session_id {
            builder = builder.header("X-Session-Id", session_id);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    url: self.base_url.clone(),
                    timeout_secs: self.timeout_secs,
                }
            } else {
                ApiError::Network {
                    url: self.base_url.clone(),
                    source: e,
                }
            }
        })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| ApiError::Network {
            url: self.base_url.clone(),
            source: e,
        })?;

        if status.is_success() {
            trace!(%url, status = status.as_u16(), "request succeeded");
            return serde_json::from_str(&raw)
                .map_err(|e| ApiError::Protocol(format!("undecodable response body: {e}")));
        }

        Err(Self::status_error(status, &raw))
    }

    /// Map a non-success status and body into the failure taxonomy.
    fn status_error(status: StatusCode, raw: &str) -> ApiError {
        let body: Option<Value> = serde_json::from_str(raw).ok();
        let detail = body
            .as_ref()
            .and_then(|v| v.get("detail"))
            .and_then(Value::as_str)
            .map_or_else(
                || {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                },
                ToString::to_string,
            );

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(detail),
            StatusCode::TOO_MANY_REQUESTS => {
                let remaining = body
                    .as_ref()
                    .and_then(|v| v.get("remaining_executions").or_else(|| v.get("remaining")))
                    .and_then(Value::as_u64)
                    .map(|n| n as u32);
                ApiError::RateLimit { detail, remaining }
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation(detail)
            }
            other => ApiError::Api {
                status: other.as_u16(),
                detail,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("https://mockfactory.io/", 30, None, None).expect("client");
        assert_eq!(client.base_url(), "https://mockfactory.io");
    }

    #[test]
    fn authenticated_flag_tracks_token() {
        let anon = ApiClient::new("https://mockfactory.io", 30, None, None).expect("client");
        assert!(!anon.is_authenticated());

        let authed =
            ApiClient::new("https://mockfactory.io", 30, Some("tok".into()), None).expect("client");
        assert!(authed.is_authenticated());
    }

    #[test]
    fn status_error_maps_auth() {
        let err = ApiClient::status_error(
            StatusCode::UNAUTHORIZED,
            r#"{"detail":"token expired"}"#,
        );
        assert!(matches!(err, ApiError::Auth(ref d) if d == "token expired"));
    }

    #[test]
    fn status_error_maps_rate_limit_with_remaining() {
        let err = ApiClient::status_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"detail":"daily quota exhausted","remaining_executions":0}"#,
        );
        match err {
            ApiError::RateLimit { detail, remaining } => {
                assert_eq!(detail, "daily quota exhausted");
                assert_eq!(remaining, Some(0));
            }
            other => panic!("expected rate limit error, got {other:?}"),
        }
    }

    #[test]
    fn status_error_maps_validation_verbatim() {
        let err = ApiClient::status_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":"code must not be empty"}"#,
        );
        assert!(matches!(err, ApiError::Validation(ref d) if d == "code must not be empty"));
    }

    #[test]
    fn status_error_without_detail_uses_canonical_reason() {
        let err = ApiClient::status_error(StatusCode::BAD_GATEWAY, "not json");
        match err {
            ApiError::Api { status, detail } => {
                assert_eq!(status, 502);
                assert_eq!(detail, "Bad Gateway");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
