//! Integration tests for GET /segments.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post};
use creatorhub_db::{DocumentStore, SEGMENT_COLLECTION};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: empty store lists no segments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_store_returns_empty_list() {
    let app = common::build_test_app(common::mem_store());
    let response = get(app, "/segments").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Test: seeded store lists all four segments with their fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeded_store_lists_all_segments() {
    let store = common::mem_store();
    let app = common::build_test_app(store);

    post(app.clone(), "/seed").await;
    let response = get(app, "/segments").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 4);

    let slugs: Vec<_> = items.iter().map(|s| s["slug"].as_str().unwrap()).collect();
    assert_eq!(slugs, vec!["technology", "gaming", "lifestyle", "education"]);

    assert_eq!(items[0]["name"], "Technology");
    assert_eq!(items[0]["description"], "Tech reviews, coding, gadgets");
    assert_eq!(items[0]["color"], "#60A5FA");
}

// ---------------------------------------------------------------------------
// Test: documents with missing fields are projected leniently
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sparse_documents_are_defaulted_not_rejected() {
    let store = common::mem_store();
    store
        .insert(SEGMENT_COLLECTION, json!({ "slug": "mystery" }))
        .await
        .unwrap();

    let app = common::build_test_app(store);
    let response = get(app, "/segments").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json[0]["slug"], "mystery");
    assert_eq!(json[0]["name"], "");
    assert!(json[0]["description"].is_null());
    assert!(json[0]["color"].is_null());
}

// ---------------------------------------------------------------------------
// Test: listing without a configured database fails explicitly
// ---------------------------------------------------------------------------

#[tokio::test]
async fn segments_fail_when_database_not_configured() {
    let app = common::build_unconfigured_app();
    let response = get(app, "/segments").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "DATABASE_NOT_CONFIGURED");
}
