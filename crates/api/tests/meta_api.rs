//! Integration tests for the static endpoints and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET / returns the fixed status message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_status_message() {
    let app = common::build_test_app(common::mem_store());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Creator directory API running");
}

// ---------------------------------------------------------------------------
// Test: GET /api/hello returns the fixed greeting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn hello_returns_greeting() {
    let app = common::build_test_app(common::mem_store());
    let response = get(app, "/api/hello").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["message"].is_string());
}

// ---------------------------------------------------------------------------
// Test: static endpoints work without a configured database
// ---------------------------------------------------------------------------

#[tokio::test]
async fn static_endpoints_do_not_need_a_database() {
    for uri in ["/", "/api/hello"] {
        let app = common::build_unconfigured_app();
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri} should succeed");
    }
}

// ---------------------------------------------------------------------------
// Test: unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(common::mem_store());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(common::mem_store());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight mirrors any origin and allows credentials
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_mirrors_origin_with_credentials() {
    let app = common::build_test_app(common::mem_store());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/top-creators")
        .header("Origin", "https://any-frontend.example")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "https://any-frontend.example");

    let allow_credentials = headers
        .get("access-control-allow-credentials")
        .expect("Missing Access-Control-Allow-Credentials header")
        .to_str()
        .unwrap();
    assert_eq!(allow_credentials, "true");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("GET"),
        "Allow-Methods should contain GET, got: {allow_methods}"
    );
}
