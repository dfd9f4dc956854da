// Router tests run in-process: cargo test -p config-viewer --test http_tests

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use common::failure::Failure;
use config_viewer::{http::create_app, service::F5ConfigSource, state::AppState};
use rstest::*;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX_HTML: &str = "<!DOCTYPE html><html><body>viewer shell</body></html>";

#[fixture]
fn statics_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create statics dir");
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");
    dir
}

fn app(source: F5ConfigSource, statics: &TempDir) -> Router {
    create_app(AppState::new(source, statics.path()))
}

async fn get(app: Router, path: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[rstest]
#[tokio::test]
async fn f5_config_serves_mock_by_default(statics_dir: TempDir) {
    let (status, body) = get(app(F5ConfigSource::Mock, &statics_dir), "/api/f5Config").await;

    assert_eq!(status, StatusCode::OK);
    let document: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(document["class"], "AS3");
}

#[rstest]
#[tokio::test]
async fn f5_config_serves_configured_file(statics_dir: TempDir) {
    let file = statics_dir.path().join("f5.json");
    std::fs::write(&file, r#"{"a":1,"pool":["10.0.0.1"]}"#).unwrap();

    let (status, body) = get(app(F5ConfigSource::File(file), &statics_dir), "/api/f5Config").await;

    assert_eq!(status, StatusCode::OK);
    let document: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(document, serde_json::json!({ "a": 1, "pool": ["10.0.0.1"] }));
}

#[rstest]
#[tokio::test]
async fn f5_config_file_is_reread_per_request(statics_dir: TempDir) {
    let file = statics_dir.path().join("f5.json");
    std::fs::write(&file, r#"{"version":1}"#).unwrap();
    let app = app(F5ConfigSource::File(file.clone()), &statics_dir);

    let (_, first) = get(app.clone(), "/api/f5Config").await;
    std::fs::write(&file, r#"{"version":2}"#).unwrap();
    let (_, second) = get(app, "/api/f5Config").await;

    assert_eq!(serde_json::from_slice::<Value>(&first).unwrap()["version"], 1);
    assert_eq!(serde_json::from_slice::<Value>(&second).unwrap()["version"], 2);
}

#[rstest]
#[tokio::test]
async fn missing_f5_file_returns_not_found_failure(statics_dir: TempDir) {
    let file = statics_dir.path().join("absent.json");

    let (status, body) = get(app(F5ConfigSource::File(file), &statics_dir), "/api/f5Config").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let failure: Failure = serde_json::from_slice(&body).unwrap();
    assert_eq!(failure.status, 404);
    assert_eq!(failure.message, "F5 configuration is not available");
}

#[rstest]
#[tokio::test]
async fn malformed_f5_file_returns_internal_error(statics_dir: TempDir) {
    let file = statics_dir.path().join("broken.json");
    std::fs::write(&file, "{ not json").unwrap();

    let (status, body) = get(app(F5ConfigSource::File(file), &statics_dir), "/api/f5Config").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let failure: Failure = serde_json::from_slice(&body).unwrap();
    assert!(failure.details.is_some());
}

#[rstest]
#[tokio::test]
async fn unknown_api_route_is_json_not_found(statics_dir: TempDir) {
    let (status, body) = get(app(F5ConfigSource::Mock, &statics_dir), "/api/results").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let failure: Failure = serde_json::from_slice(&body).unwrap();
    assert_eq!(failure.message, "No API route for /api/results");
}

#[rstest]
#[tokio::test]
async fn health_reports_ok(statics_dir: TempDir) {
    let (status, body) = get(app(F5ConfigSource::Mock, &statics_dir), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[rstest]
#[case("/")]
#[case("/some/client/route")]
#[tokio::test]
async fn non_api_paths_get_the_index_shell(statics_dir: TempDir, #[case] path: &str) {
    let (status, body) = get(app(F5ConfigSource::Mock, &statics_dir), path).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), INDEX_HTML);
}
