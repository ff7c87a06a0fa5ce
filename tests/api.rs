//! End-to-end tests of the JSON-over-HTTP surface against a scratch data
//! directory.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use gcg_hub::config::Config;
use gcg_hub::Hub;

static SCRATCH_SEQ: AtomicU64 = AtomicU64::new(0);

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "gcg-hub-api-{}-{}-{}",
        tag,
        std::process::id(),
        SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn test_app(tag: &str) -> Router {
    let mut config = Config::default();
    config.storage.data_dir = scratch_dir(tag);
    Hub::open(&config).unwrap().router()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn root_reports_liveness() {
    let app = test_app("root");
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Struktur Perusahaan API is running!");
}

#[tokio::test]
async fn create_without_nama_is_rejected_and_nothing_is_written() {
    let app = test_app("reject");

    let (status, body) = send(&app, Method::POST, "/api/divisi", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Nama is required");

    let (status, body) = send(&app, Method::GET, "/api/divisi", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_returns_generated_fields() {
    let app = test_app("create");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/divisi",
        Some(json!({"nama": "Divisi Umum"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["nama"], "Divisi Umum");
    assert_eq!(body["isActive"], true);
    assert!(body["id"].is_i64());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn unknown_id_is_a_404_with_entity_message() {
    let app = test_app("missing");

    let (status, body) = send(&app, Method::GET, "/api/divisi/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Divisi not found");

    let (status, body) = send(&app, Method::GET, "/api/direksi/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Direksi not found");
}

#[tokio::test]
async fn update_merges_nama_and_preserves_identity() {
    let app = test_app("update");

    let (_, created) = send(
        &app,
        Method::POST,
        "/api/divisi",
        Some(json!({"nama": "Divisi Umum"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/divisi/{}", id),
        Some(json!({"nama": "Divisi Baru"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nama"], "Divisi Baru");
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/divisi/999999",
        Some(json!({"nama": "Divisi Baru"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_confirms_then_get_is_404() {
    let app = test_app("delete");

    let (_, created) = send(
        &app,
        Method::POST,
        "/api/divisi",
        Some(json!({"nama": "Divisi Umum"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/divisi/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Divisi deleted");

    let (status, _) = send(&app, Method::GET, &format!("/api/divisi/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/divisi/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Divisi not found");
}

#[tokio::test]
async fn collections_are_independent_and_ordered() {
    let app = test_app("collections");

    for nama in ["Divisi Umum", "Divisi Anggaran", "Divisi Arsip"] {
        let (status, _) = send(&app, Method::POST, "/api/divisi", Some(json!({"nama": nama}))).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (_, direksi) = send(
        &app,
        Method::POST,
        "/api/direksi",
        Some(json!({"nama": "Direktur Utama"})),
    )
    .await;

    let (_, divisi_list) = send(&app, Method::GET, "/api/divisi", None).await;
    let names: Vec<&str> = divisi_list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["nama"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Divisi Umum", "Divisi Anggaran", "Divisi Arsip"]);

    let (_, direksi_list) = send(&app, Method::GET, "/api/direksi", None).await;
    assert_eq!(direksi_list.as_array().unwrap().len(), 1);
    assert_eq!(direksi_list[0]["id"], direksi["id"]);
}

#[tokio::test]
async fn collection_survives_reopening_the_hub() {
    let mut config = Config::default();
    config.storage.data_dir = scratch_dir("reopen");

    let app = Hub::open(&config).unwrap().router();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/direksi",
        Some(json!({"nama": "Direktur Keuangan"})),
    )
    .await;

    // A second hub over the same data directory sees the same collection.
    let reopened = Hub::open(&config).unwrap().router();
    let (status, body) = send(
        &reopened,
        Method::GET,
        &format!("/api/direksi/{}", created["id"].as_i64().unwrap()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nama"], "Direktur Keuangan");
}

#[tokio::test]
async fn corrupt_collection_file_is_a_500() {
    let mut config = Config::default();
    config.storage.data_dir = scratch_dir("corrupt");
    std::fs::write(config.collection_path("divisi"), "{not json").unwrap();

    let app = Hub::open(&config).unwrap().router();
    let (status, body) = send(&app, Method::GET, "/api/divisi", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("Corrupt"));
}
