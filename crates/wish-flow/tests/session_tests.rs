//! End-to-end celebrate session tests with a fake camera and mock service.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wish_flow::{
    AlwaysGranted, CameraDevice, CameraLease, CelebrateSession, CelebrateStep, FlowConfig,
    Orchestrator,
};
use wish_genai::GenAiClient;
use wish_models::{AppRoute, ImageData};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash-image:generateContent";

struct FakeCamera {
    releases: Arc<AtomicU32>,
}

#[async_trait]
impl CameraDevice for FakeCamera {
    async fn grab_frame(&mut self) -> Result<ImageData, String> {
        Ok(ImageData::jpeg("c2VsZmll"))
    }

    fn release(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

fn lease(releases: &Arc<AtomicU32>) -> CameraLease {
    CameraLease::acquire(Box::new(FakeCamera {
        releases: Arc::clone(releases),
    }))
}

fn orchestrator_for(server: &MockServer) -> Orchestrator {
    let client = GenAiClient::new("test-key").with_base_url(server.uri());
    Orchestrator::new(client, Arc::new(AlwaysGranted), FlowConfig::default())
}

fn image_response(data: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "parts": [
            { "inlineData": { "mimeType": "image/png", "data": data } }
        ]}}]
    }))
}

#[tokio::test]
async fn capture_populates_gallery_and_advances() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(image_response("Z2Vu"))
        .expect(4)
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server);
    let releases = Arc::new(AtomicU32::new(0));
    let mut session = CelebrateSession::new(Some("Sam".into()));

    session
        .handle_capture(&orchestrator, lease(&releases))
        .await
        .unwrap();

    assert_eq!(session.step(), CelebrateStep::Animation);
    assert_eq!(session.gallery().len(), 4);
    assert_eq!(releases.load(Ordering::SeqCst), 1);

    session.finish_animation();
    assert_eq!(session.step(), CelebrateStep::Download);
}

#[tokio::test]
async fn empty_batch_returns_to_camera() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server);
    let releases = Arc::new(AtomicU32::new(0));
    let mut session = CelebrateSession::new(None);

    let err = session
        .handle_capture(&orchestrator, lease(&releases))
        .await
        .unwrap_err();

    assert!(err.is_no_results());
    assert_eq!(session.step(), CelebrateStep::Camera);
    assert!(session.gallery().is_empty());
    // The camera was still released exactly once.
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn edit_replaces_the_selected_element_in_place() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(image_response("Z2Vu"))
        .up_to_n_times(4)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(image_response("ZWRpdGVk"))
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server);
    let releases = Arc::new(AtomicU32::new(0));
    let mut session = CelebrateSession::new(None);
    session
        .handle_capture(&orchestrator, lease(&releases))
        .await
        .unwrap();

    let target = session.gallery().images()[2].id;
    session.select_for_edit(target);

    let replaced = session
        .apply_edit(&orchestrator, "add fireworks")
        .await
        .unwrap();

    assert!(replaced);
    assert_eq!(session.gallery().len(), 4);
    assert_eq!(
        session.gallery().images()[2].url,
        "data:image/png;base64,ZWRpdGVk"
    );
    // Identity is stable across the edit, selection is cleared.
    assert_eq!(session.gallery().images()[2].id, target);
    assert!(session.selected_for_edit().is_none());
}

#[tokio::test]
async fn edit_without_selection_is_a_noop() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server);
    let mut session = CelebrateSession::new(None);

    let replaced = session.apply_edit(&orchestrator, "anything").await.unwrap();
    assert!(!replaced);
}

#[tokio::test]
async fn edit_failure_keeps_gallery_and_selection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(image_response("Z2Vu"))
        .up_to_n_times(4)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server);
    let releases = Arc::new(AtomicU32::new(0));
    let mut session = CelebrateSession::new(None);
    session
        .handle_capture(&orchestrator, lease(&releases))
        .await
        .unwrap();

    let target = session.gallery().images()[0].id;
    session.select_for_edit(target);
    let before: Vec<String> = session
        .gallery()
        .urls()
        .into_iter()
        .map(String::from)
        .collect();

    let err = session
        .apply_edit(&orchestrator, "add fireworks")
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(
        session.gallery().urls(),
        before.iter().map(String::as_str).collect::<Vec<_>>()
    );
    // Selection survives so the user can retry.
    assert_eq!(session.selected_for_edit(), Some(target));
}

#[tokio::test]
async fn session_only_starts_from_celebrate_routes() {
    assert!(CelebrateSession::from_route(&AppRoute::parse("#/celebrate?name=Sam")).is_some());
    assert!(CelebrateSession::from_route(&AppRoute::parse("#/tools")).is_none());
    assert!(CelebrateSession::from_route(&AppRoute::parse("")).is_none());
}
