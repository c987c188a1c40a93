//! Tests for the Stability client against a mock server.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use scriptorium_error::{ImageErrorKind, ScriptoriumErrorKind};
use scriptorium_interface::ImageDriver;
use scriptorium_models::StabilityClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> StabilityClient {
    StabilityClient::new("stab-key").with_host(server.uri())
}

fn image_kind(err: &scriptorium_error::ScriptoriumError) -> &ImageErrorKind {
    match err.kind() {
        ScriptoriumErrorKind::Image(e) => &e.kind,
        other => panic!("expected image error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_last_artifact_is_decoded() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/v1/generation/stable-diffusion-xl-beta-v2-2-2/text-to-image",
        ))
        .and(header("authorization", "Bearer stab-key"))
        .and(body_partial_json(json!({
            "text_prompts": [{"text": "A lighthouse in snow"}],
            "cfg_scale": 7,
            "clip_guidance_preset": "FAST_BLUE",
            "height": 768,
            "width": 512,
            "samples": 1,
            "steps": 30
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artifacts": [
                {"base64": STANDARD.encode(b"first"), "seed": 1, "finishReason": "SUCCESS"},
                {"base64": STANDARD.encode(b"second"), "seed": 2, "finishReason": "SUCCESS"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client(&server)
        .generate_image("A lighthouse in snow")
        .await?;
    assert_eq!(bytes, b"second");
    Ok(())
}

#[tokio::test]
async fn test_error_status_is_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let err = client(&server).generate_image("anything").await.unwrap_err();
    assert!(matches!(
        image_kind(&err),
        ImageErrorKind::Upstream { status: 401, .. }
    ));
}

#[tokio::test]
async fn test_no_artifacts_is_missing_artifact() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"artifacts": []})))
        .mount(&server)
        .await;

    let err = client(&server).generate_image("anything").await.unwrap_err();
    assert!(matches!(image_kind(&err), ImageErrorKind::MissingArtifact(_)));
}

#[tokio::test]
async fn test_bad_base64_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artifacts": [{"base64": "***not base64***"}]
        })))
        .mount(&server)
        .await;

    let err = client(&server).generate_image("anything").await.unwrap_err();
    assert!(matches!(image_kind(&err), ImageErrorKind::Base64Decode(_)));
}

#[tokio::test]
async fn test_custom_engine_in_path() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/generation/custom-engine/text-to-image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artifacts": [{"base64": STANDARD.encode(b"png")}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client(&server)
        .with_engine("custom-engine")
        .generate_image("anything")
        .await?;
    assert_eq!(bytes, b"png");
    Ok(())
}
