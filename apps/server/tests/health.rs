use axum::{body::Body, http::Request};
use chemtrack_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works() {
    let config = Config::default();
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn readyz_echoes_request_id() {
    let config = Config::default();
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn keeps_caller_request_id() {
    let config = Config::default();
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .header("x-request-id", "lab-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "lab-42");
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let config = Config::default();
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/api/v1/compounds/lookup"].is_object());
    assert!(doc["paths"]["/api/v1/formula/render"].is_object());
}

#[test]
fn empty_endpoint_is_rejected() {
    let mut config = Config::default();
    config.gateway.pug_url = " ".to_string();
    assert!(build_state(&config).is_err());
}
