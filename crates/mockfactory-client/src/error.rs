//! Failure taxonomy for backend calls.
//!
//! Every transport or HTTP failure is normalized into one of these kinds so
//! the CLI can print a distinct, actionable message instead of a raw
//! transport error.

/// Errors surfaced by [`crate::ApiClient`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend could not be reached at all.
    #[error("cannot reach backend at {url}: {source}")]
    Network {
        /// Configured base URL, reported for diagnosis.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The backend did not respond within the configured timeout.
    #[error(
        "request to {url} timed out after {timeout_secs}s \
         (adjust with 'mockfactory config set timeout <secs>')"
    )]
    Timeout {
        /// Configured base URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u32,
    },

    /// Missing, expired, or invalid session (HTTP 401/403).
    #[error("authentication failed: {0} (run 'mockfactory login' to sign in again)")]
    Auth(String),

    /// Tier quota exhausted (HTTP 429).
    #[error("rate limit exceeded: {detail}")]
    RateLimit {
        /// Backend-provided detail.
        detail: String,
        /// Executions remaining in the current window, when reported.
        remaining: Option<u32>,
    },

    /// Backend rejected the payload (HTTP 400/422); detail is verbatim.
    #[error("request rejected by backend: {0}")]
    Validation(String),

    /// Any other non-success HTTP status.
    #[error("backend error (HTTP {status}): {detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Backend-provided detail.
        detail: String,
    },

    /// The response body could not be decoded.
    #[error("unexpected response from backend: {0}")]
    Protocol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_url_and_seconds() {
        let err = ApiError::Timeout {
            url: "https://mockfactory.io".into(),
            timeout_secs: 30,
        };
        let msg = err.to_string();
        assert!(msg.contains("https://mockfactory.io"));
        assert!(msg.contains("30s"));
        assert!(msg.contains("config set timeout"));
    }

    #[test]
    fn auth_message_suggests_relogin() {
        let err = ApiError::Auth("token expired".into());
        assert!(err.to_string().contains("mockfactory login"));
    }

    #[test]
    fn validation_detail_is_verbatim() {
        let err = ApiError::Validation("code must not be empty".into());
        assert!(err.to_string().contains("code must not be empty"));
    }

    #[test]
    fn api_error_reports_status() {
        let err = ApiError::Api {
            status: 502,
            detail: "bad gateway".into(),
        };
        assert!(err.to_string().contains("502"));
    }
}
