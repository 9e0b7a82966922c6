#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use shieldx_api::config::ServerConfig;
use shieldx_api::router::build_app_router;
use shieldx_api::state::AppState;
use shieldx_core::clock::ManualClock;
use shieldx_db::StateStore;

/// 2023-11-14T22:13:20Z, an arbitrary fixed starting point.
pub const START_MS: i64 = 1_700_000_000_000;

/// A fully wired application backed by a throwaway state file and a
/// manually driven clock.
pub struct TestApp {
    pub router: Router,
    pub clock: Arc<ManualClock>,
    pub store: Arc<StateStore>,
    /// Keeps the state directory alive for the test's duration.
    pub dir: TempDir,
}

/// Build a test `ServerConfig` pointing at `dir`.
pub fn test_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        state_file: dir.path().join("state.json"),
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers.
///
/// Goes through the same [`build_app_router`] as `main.rs` so integration
/// tests exercise the production middleware stack.
pub async fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = test_config(&dir);

    let (store, _) = StateStore::open(&config.state_file)
        .await
        .expect("open state store");
    let store = Arc::new(store);
    let clock = Arc::new(ManualClock::new(START_MS));

    let state = AppState {
        store: Arc::clone(&store),
        clock: clock.clone(),
    };

    TestApp {
        router: build_app_router(state, &config),
        clock,
        store,
        dir,
    }
}

pub async fn get(app: &TestApp, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &TestApp, uri: &str, body: Value) -> Response {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_empty(app: &TestApp, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn post_raw(app: &TestApp, uri: &str, content_type: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Issue a code through the API and return `(code, ts)`.
pub async fn generate(app: &TestApp) -> (String, i64) {
    let json = body_json(post_empty(app, "/eep/generate").await).await;
    assert_eq!(json["ok"], true, "generate failed: {json}");
    (
        json["code"].as_str().unwrap().to_string(),
        json["ts"].as_i64().unwrap(),
    )
}
