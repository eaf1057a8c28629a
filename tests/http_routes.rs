//! End-to-end route tests driving the full router with `oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use snail_api::api::{create_router, AppState};
use snail_api::config::{Config, Greeting};
use snail_api::template::{render_page, Page};

fn app(greeting: Greeting) -> Router {
    let config = Config {
        greeting,
        ..Config::default()
    };
    create_router(&config, AppState::new(greeting)).unwrap()
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
    send(app(Greeting::RegularSnails), Method::GET, uri).await
}

async fn get_json(uri: &str) -> Value {
    let (status, content_type, body) = get(uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn root_serves_team_greeting() {
    let (status, content_type, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert_eq!(body, "Hello World from Regular Snails");
}

#[tokio::test]
async fn root_serves_luxta_greeting() {
    let (status, _, body) = send(app(Greeting::Luxta), Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Welcome to Luxta! Under development.");
}

#[tokio::test]
async fn root_serves_rendered_home_page() {
    let (status, content_type, body) = send(app(Greeting::Home), Method::GET, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
    assert_eq!(body, render_page(Page::Home).unwrap());
}

#[tokio::test]
async fn status_returns_team_blob() {
    assert_eq!(
        get_json("/status").await,
        json!({"ok": true, "team": "Regular Snails", "msg": "My first API"})
    );
}

#[tokio::test]
async fn status_body_is_exact() {
    let (_, _, body) = get("/status").await;
    assert_eq!(body, r#"{"ok":true,"team":"Regular Snails","msg":"My first API"}"#);
}

#[tokio::test]
async fn my_api_returns_message() {
    let (status, content_type, body) = get("/jtrejomyapi").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert_eq!(body, "This is the new HTTP API function");
}

#[tokio::test]
async fn luca_returns_message() {
    let (status, content_type, body) = get("/luca").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert_eq!(body, "Luca's first API should be working.");
}

#[tokio::test]
async fn luca_json_returns_owner() {
    assert_eq!(
        get_json("/luca.json").await,
        json!({"ok": true, "owner": "Luca", "team": "Regular Snails"})
    );
}

#[tokio::test]
async fn brightness_returns_average() {
    let (status, content_type, body) = get("/brightness").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"avg_brightness":160.0}"#);
}

#[tokio::test]
async fn sun_returns_golden_hours() {
    let body = get_json("/api/sun").await;

    for key in [
        "sunrise",
        "transit",
        "sunset",
        "goldenHourMorningStart",
        "goldenHourMorningEnd",
        "goldenHourEveningStart",
        "goldenHourEveningEnd",
    ] {
        let value = body[key].as_str().unwrap_or_else(|| panic!("missing {key}"));
        assert!(value.ends_with('Z'), "{key} = {value}");
    }
}

#[tokio::test]
async fn repeated_requests_return_identical_bodies() {
    for uri in ["/", "/status", "/jtrejomyapi", "/luca", "/luca.json", "/brightness"] {
        let first = get(uri).await;
        let second = get(uri).await;
        assert_eq!(first, second, "{uri}");
    }
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _, _) = get("/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_get_is_method_not_allowed() {
    for uri in ["/", "/status", "/luca.json", "/brightness"] {
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let (status, _, _) = send(app(Greeting::RegularSnails), method.clone(), uri).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        }
    }
}

#[tokio::test]
async fn metrics_route_without_recorder_is_not_found() {
    let (status, _, _) = get("/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
