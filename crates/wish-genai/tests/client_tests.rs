//! HTTP-level client tests against a mock service.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wish_genai::{GenAiClient, GenAiError, GenerateContentRequest, ModelProfile};
use wish_genai::{VideoGenerationRequest, VideoImage, VideoInstance, VideoParameters};
use wish_models::ImageData;

fn client_for(server: &MockServer) -> GenAiClient {
    GenAiClient::new("test-key").with_base_url(server.uri())
}

#[tokio::test]
async fn generate_content_returns_inline_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash-image:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [
                { "inlineData": { "mimeType": "image/jpeg", "data": "Zm9v" } },
                { "text": "festive" }
            ]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "YmFy" } }
            ]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = GenerateContentRequest::image_and_text(&ImageData::jpeg("Zm9v"), "festive");
    let response = client
        .generate_content(ModelProfile::FlashImage, &request)
        .await
        .unwrap();

    assert_eq!(response.first_inline_data().unwrap().data, "YmFy");
}

#[tokio::test]
async fn non_success_status_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate_content(ModelProfile::FlashLite, &GenerateContentRequest::text("hi"))
        .await
        .unwrap_err();

    match err {
        GenAiError::Api { status, message } => {
            assert_eq!(status, 429);
            assert!(message.contains("quota exhausted"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    assert!(client
        .generate_content(ModelProfile::FlashLite, &GenerateContentRequest::text("hi"))
        .await
        .unwrap_err()
        .is_transport());
}

#[tokio::test]
async fn video_submission_and_polling_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/v1beta/models/veo-3.1-fast-generate-preview:predictLongRunning",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "operations/op-123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1beta/operations/op-123"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "operations/op-123",
            "done": true,
            "response": { "generatedVideos": [
                { "video": { "uri": "https://v.example/clip:download?alt=media" } }
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = VideoGenerationRequest {
        instances: vec![VideoInstance {
            prompt: "wave and smile".into(),
            image: Some(VideoImage::from_image(&ImageData::png("Zm9v"))),
        }],
        parameters: VideoParameters {
            aspect_ratio: "16:9".into(),
            resolution: "720p".into(),
            sample_count: 1,
        },
    };

    let handle = client
        .start_video_generation(ModelProfile::VideoFast, &request)
        .await
        .unwrap();
    assert_eq!(handle.name(), "operations/op-123");

    let operation = client.poll_video_operation(&handle).await.unwrap();
    assert!(operation.done);
    assert_eq!(
        client.with_video_credential(operation.first_video_uri().unwrap()),
        "https://v.example/clip:download?alt=media&key=test-key"
    );
}
