//! API client integration tests against a local mock backend.

use httpmock::prelude::*;
use serde_json::json;

use mockfactory_client::{ApiClient, ApiError, ExecutionRequest, Language, Tier};

fn request(language: Language, code: &str) -> ExecutionRequest {
    ExecutionRequest {
        language,
        code: code.into(),
        timeout: None,
    }
}

#[tokio::test]
async fn execute_decodes_successful_run() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/code/execute")
                .json_body(json!({"language": "python", "code": "print(\"hi\")"}));
            then.status(200).json_body(json!({
                "stdout": "hi\n",
                "stderr": "",
                "exit_code": 0,
                "duration_ms": 42,
                "tier": "free",
                "remaining_executions": 9,
            }));
        })
        .await;

    let client = ApiClient::new(server.base_url(), 5, None, None).expect("client");
    let result = client
        .execute(&request(Language::Python, "print(\"hi\")"))
        .await
        .expect("execute");

    mock.assert_async().await;
    assert_eq!(result.stdout, "hi\n");
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.duration_ms, 42);
    assert_eq!(result.tier, Tier::Free);
    assert_eq!(result.remaining_executions, Some(9));
}

#[tokio::test]
async fn execute_surfaces_program_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/code/execute");
            then.status(200).json_body(json!({
                "stdout": "",
                "stderr": "ZeroDivisionError: division by zero",
                "exit_code": 1,
                "duration_ms": 17,
            }));
        })
        .await;

    let client = ApiClient::new(server.base_url(), 5, None, None).expect("client");
    let result = client
        .execute(&request(Language::Python, "1/0"))
        .await
        .expect("execute");

    assert!(!result.success());
    assert!(result.stderr.contains("division by zero"));
}

#[tokio::test]
async fn bearer_token_is_attached_when_present() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/code/usage")
                .header("authorization", "Bearer tok_123");
            then.status(200).json_body(json!({
                "runs_used": 3,
                "runs_limit": 10,
                "tier": "free",
                "is_authenticated": true,
            }));
        })
        .await;

    let client =
        ApiClient::new(server.base_url(), 5, Some("tok_123".into()), None).expect("client");
    let usage = client.usage().await.expect("usage");

    mock.assert_async().await;
    assert_eq!(usage.remaining(), 7);
    assert!(usage.authenticated);
}

#[tokio::test]
async fn session_id_header_is_attached_when_configured() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/code/usage")
                .header("x-session-id", "sess-42");
            then.status(200).json_body(json!({
                "runs_used": 0,
                "runs_limit": 5,
                "tier": "anonymous",
            }));
        })
        .await;

    let client =
        ApiClient::new(server.base_url(), 5, None, Some("sess-42".into())).expect("client");
    let usage = client.usage().await.expect("usage");

    mock.assert_async().await;
    assert_eq!(usage.tier, Tier::Anonymous);
}

#[tokio::test]
async fn signin_returns_access_token() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/signin")
                .json_body(json!({"email": "dev@example.com", "password": "hunter2"}));
            then.status(200).json_body(json!({"access_token": "tok_new"}));
        })
        .await;

    let client = ApiClient::new(server.base_url(), 5, None, None).expect("client");
    let token = client.signin("dev@example.com", "hunter2").await.expect("signin");
    assert_eq!(token, "tok_new");
}

#[tokio::test]
async fn expired_token_maps_to_auth_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/auth/me");
            then.status(401).json_body(json!({"detail": "token expired"}));
        })
        .await;

    let client = ApiClient::new(server.base_url(), 5, Some("stale".into()), None).expect("client");
    let err = client.profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Auth(ref d) if d == "token expired"));
}

#[tokio::test]
async fn quota_exhaustion_maps_to_rate_limit() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/code/execute");
            then.status(429).json_body(json!({
                "detail": "daily limit reached, resets at midnight UTC",
                "remaining_executions": 0,
            }));
        })
        .await;

    let client = ApiClient::new(server.base_url(), 5, None, None).expect("client");
    let err = client.execute(&request(Language::Shell, "echo hi")).await.unwrap_err();
    match err {
        ApiError::RateLimit { detail, remaining } => {
            assert!(detail.contains("daily limit"));
            assert_eq!(remaining, Some(0));
        }
        other => panic!("expected rate limit, got {other:?}"),
    }
}

#[tokio::test]
async fn backend_validation_detail_is_verbatim() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/code/execute");
            then.status(422)
                .json_body(json!({"detail": "code exceeds maximum length of 65536 bytes"}));
        })
        .await;

    let client = ApiClient::new(server.base_url(), 5, None, None).expect("client");
    let err = client.execute(&request(Language::Php, "<?php")).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ref d) if d == "code exceeds maximum length of 65536 bytes"
    ));
}

#[tokio::test]
async fn unreachable_backend_maps_to_network_error() {
    // Nothing listens on this port.
    let client = ApiClient::new("http://127.0.0.1:1", 2, None, None).expect("client");
    let err = client.usage().await.unwrap_err();
    match err {
        ApiError::Network { url, .. } => assert_eq!(url, "http://127.0.0.1:1"),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_maps_to_protocol_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/code/usage");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let client = ApiClient::new(server.base_url(), 5, None, None).expect("client");
    let err = client.usage().await.unwrap_err();
    assert!(matches!(err, ApiError::Protocol(_)));
}
