//! End-to-end tests of the HTTP surface over an in-memory store.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use fennel_core::{RecordStore, ShortId};
use fennel_gateway::{App, AppState};
use fennel_shortener::{ShortenService, Shortener};
use fennel_store::MemoryStore;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> (Arc<MemoryStore>, Router) {
    let (store, _changes) = MemoryStore::new();
    let store = Arc::new(store);
    let shortener: Arc<dyn Shortener> = Arc::new(ShortenService::new(store.clone()));
    (store, App::router(AppState::new(shortener)))
}

fn create_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/urls")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn get_request(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_returns_201_with_hex_identifier() {
    let (_store, app) = test_app();

    let response = app
        .oneshot(create_request(r#"{"url": "https://example.com"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["shortened_url"], "837b2b5793a240b3");
}

#[tokio::test]
async fn create_is_idempotent_over_http() {
    let (_store, app) = test_app();

    let first = app
        .clone()
        .oneshot(create_request(r#"{"url": "https://example.org"}"#))
        .await
        .unwrap();
    let second = app
        .oneshot(create_request(r#"{"url": "https://example.org"}"#))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(first).await["shortened_url"],
        body_json(second).await["shortened_url"]
    );
}

#[tokio::test]
async fn resolve_redirects_to_original_url() {
    let (_store, app) = test_app();

    app.clone()
        .oneshot(create_request(r#"{"url": "https://example.com"}"#))
        .await
        .unwrap();

    let response = app
        .oneshot(get_request("/837b2b5793a240b3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn resolve_unknown_identifier_is_404() {
    let (_store, app) = test_app();

    let response = app
        .oneshot(get_request("/ffffffffffffffff"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resolve_malformed_identifier_is_404() {
    let (_store, app) = test_app();

    let response = app.oneshot(get_request("/NOT-AN-ID")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_with_empty_url_is_rejected_without_write() {
    let (store, app) = test_app();

    let response = app.oneshot(create_request(r#"{"url": ""}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store
        .get_url(&ShortId::for_url(""))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn create_with_missing_url_field_is_client_error() {
    let (store, app) = test_app();

    let response = app
        .oneshot(create_request(r#"{"address": "https://example.com"}"#))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert!(store
        .get_url(&ShortId::for_url("https://example.com"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn create_with_unparseable_body_is_client_error() {
    let (_store, app) = test_app();

    let response = app.oneshot(create_request("not json")).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (_store, app) = test_app();

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}
