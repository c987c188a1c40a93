//! Tests for the Anthropic client against a mock server.

use scriptorium_core::CompletionRequest;
use scriptorium_error::GenerationErrorKind;
use scriptorium_interface::TextDriver;
use scriptorium_models::AnthropicClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> AnthropicClient {
    AnthropicClient::new("test-key", "claude-3-haiku-20240307").with_base_url(server.uri())
}

fn request() -> CompletionRequest {
    CompletionRequest::builder()
        .prompt("Write a chapter")
        .system(Some("You are a world-class author.".to_string()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_success_returns_trimmed_text() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-3-haiku-20240307",
            "max_tokens": 3000,
            "system": "You are a world-class author.",
            "messages": [{"role": "user", "content": "Write a chapter"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_01",
            "model": "claude-3-haiku-20240307",
            "content": [{"type": "text", "text": "  Once upon a time.  \n"}],
            "stop_reason": "end_turn"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).complete(&request()).await?;
    assert_eq!(response.text, "Once upon a time.");
    Ok(())
}

#[tokio::test]
async fn test_rate_limit_is_retryable_kind() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let err = client(&server).complete(&request()).await.unwrap_err();
    let kind = err.generation_kind().unwrap();
    assert!(matches!(kind, GenerationErrorKind::RateLimited(_)));
    assert!(kind.is_retryable());
}

#[tokio::test]
async fn test_server_error_is_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = client(&server).complete(&request()).await.unwrap_err();
    match err.generation_kind() {
        Some(GenerationErrorKind::Upstream { status, message }) => {
            assert_eq!(*status, 500);
            assert_eq!(message, "overloaded");
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_text_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "   \n"}]
        })))
        .mount(&server)
        .await;

    let err = client(&server).complete(&request()).await.unwrap_err();
    assert_eq!(err.generation_kind(), Some(&GenerationErrorKind::EmptyResponse));
}

#[tokio::test]
async fn test_missing_content_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "msg_02"})))
        .mount(&server)
        .await;

    let err = client(&server).complete(&request()).await.unwrap_err();
    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).complete(&request()).await.unwrap_err();
    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_request_model_overrides_client_model() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"model": "claude-3-5-sonnet-20241022"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "ok"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = CompletionRequest::builder()
        .prompt("hi")
        .model(Some("claude-3-5-sonnet-20241022".to_string()))
        .build()?;
    let response = client(&server).complete(&req).await?;
    assert_eq!(response.text, "ok");
    Ok(())
}
