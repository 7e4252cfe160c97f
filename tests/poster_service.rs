// SPDX-License-Identifier: MPL-2.0
//! Generation calls against a local stand-in for the poster service.

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use image_rs::{ImageFormat, Rgb, RgbImage};
use posterly::domain::poster::{FormState, Platform, PosterLanguage, PosterRequest};
use posterly::error::ServiceError;
use posterly::infrastructure::PosterService;
use posterly::ui::composer;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the stub saw on its last request.
#[derive(Clone, Default)]
struct Received {
    content_type: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<serde_json::Value>>>,
}

fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([236, 72, 153]));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, format).expect("encode test image");
    buffer.into_inner()
}

async fn poster(
    State(received): State<Received>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    *received.content_type.lock().expect("lock") = content_type;
    *received.body.lock().expect("lock") = Some(body);

    (
        [(header::CONTENT_TYPE, "image/jpeg")],
        encoded(12, 8, ImageFormat::Jpeg),
    )
}

async fn slow_portrait() -> impl IntoResponse {
    tokio::time::sleep(Duration::from_millis(300)).await;
    encoded(10, 20, ImageFormat::Png)
}

async fn fast_landscape() -> impl IntoResponse {
    encoded(20, 10, ImageFormat::Png)
}

async fn server_error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "worker crashed")
}

async fn empty() -> impl IntoResponse {
    StatusCode::OK
}

async fn not_an_image() -> impl IntoResponse {
    Json(serde_json::json!({ "error": "quota exceeded" }))
}

/// Starts the stub on an ephemeral port and returns its base URL.
async fn spawn_stub(received: Received) -> String {
    let app = Router::new()
        .route("/generate-poster", post(poster))
        .route("/slow", post(slow_portrait))
        .route("/fast", post(fast_landscape))
        .route("/error", post(server_error))
        .route("/empty", post(empty))
        .route("/json", post(not_an_image))
        .with_state(received);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{addr}")
}

fn my_app_request() -> PosterRequest {
    let mut form = FormState::with_choices(PosterLanguage::Arabic, Platform::TikTok);
    form.set_app_name("MyApp");
    form.set_app_desc("desc");
    form.update_feature(0, "Fast");
    form.add_feature();
    form.to_request()
}

#[tokio::test]
async fn posts_json_and_returns_image_bytes() {
    let received = Received::default();
    let base = spawn_stub(received.clone()).await;
    let service = PosterService::new(format!("{base}/generate-poster")).expect("client");

    let bytes = service
        .generate(&my_app_request())
        .await
        .expect("generation succeeds");

    assert_eq!(bytes, encoded(12, 8, ImageFormat::Jpeg));
    assert_eq!(
        received.content_type.lock().expect("lock").as_deref(),
        Some("application/json")
    );
    assert_eq!(
        received.body.lock().expect("lock").clone(),
        Some(serde_json::json!({
            "app_name": "MyApp",
            "app_desc": "desc",
            "features": ["Fast"],
            "language": "ar",
            "platform": "tiktok",
        }))
    );
}

#[tokio::test]
async fn server_error_is_reported_as_status() {
    let base = spawn_stub(Received::default()).await;
    let service = PosterService::new(format!("{base}/error")).expect("client");

    let err = service
        .generate(&my_app_request())
        .await
        .expect_err("500 is a failure");

    assert_eq!(err, ServiceError::Status(500));
}

#[tokio::test]
async fn unknown_route_is_reported_as_status() {
    let base = spawn_stub(Received::default()).await;
    let service = PosterService::new(format!("{base}/nowhere")).expect("client");

    let err = service.generate(&my_app_request()).await.expect_err("404");

    assert_eq!(err, ServiceError::Status(404));
}

#[tokio::test]
async fn empty_body_is_malformed() {
    let base = spawn_stub(Received::default()).await;
    let service = PosterService::new(format!("{base}/empty")).expect("client");

    let err = service
        .generate(&my_app_request())
        .await
        .expect_err("empty body");

    assert!(matches!(err, ServiceError::MalformedResponse(_)));
}

#[tokio::test]
async fn failed_generation_keeps_the_displayed_poster() {
    let base = spawn_stub(Received::default()).await;
    let ok = PosterService::new(format!("{base}/generate-poster")).expect("client");
    let failing = PosterService::new(format!("{base}/error")).expect("client");

    let mut state = composer::State::default();
    let request = state.begin_generation();
    state
        .finish_generation(ok.generate(&request).await)
        .expect("first poster");

    let request = state.begin_generation();
    let err = state
        .finish_generation(failing.generate(&request).await)
        .expect_err("second call fails");

    assert_eq!(err, ServiceError::Status(500));
    assert_eq!(state.poster().map(|p| p.dimensions()), Some((12, 8)));
}

#[tokio::test]
async fn json_body_is_rejected_by_the_composer() {
    let base = spawn_stub(Received::default()).await;
    let service = PosterService::new(format!("{base}/json")).expect("client");

    let mut state = composer::State::default();
    let request = state.begin_generation();
    let bytes = service.generate(&request).await.expect("2xx with a body");
    let err = state.finish_generation(Ok(bytes)).expect_err("not an image");

    assert!(matches!(err, ServiceError::MalformedResponse(_)));
    assert!(state.poster().is_none());
}

#[tokio::test]
async fn last_response_to_arrive_is_displayed() {
    let base = spawn_stub(Received::default()).await;
    let slow = PosterService::new(format!("{base}/slow")).expect("client");
    let fast = PosterService::new(format!("{base}/fast")).expect("client");

    let mut state = composer::State::default();
    let first = state.begin_generation();
    let second = state.begin_generation();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    for (service, request) in [(slow, first), (fast, second)] {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(service.generate(&request).await).ok();
        });
    }
    drop(tx);

    while let Some(result) = rx.recv().await {
        state.finish_generation(result).expect("both succeed");
    }

    // The slow one was sent first but answered last.
    let poster = state.poster().expect("poster set");
    assert_eq!(poster.dimensions(), (10, 20));
    assert!(!state.is_generating());
}
