use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use citei_core::prelude::*;
use http_body_util::BodyExt;
use tower::ServiceExt;

#[derive(Clone)]
struct Greeting(&'static str);

async fn hello(State(greeting): State<Greeting>) -> &'static str {
    greeting.0
}

async fn boom() -> &'static str {
    panic!("boom")
}

fn app() -> Router {
    AppBuilder::new(Greeting("ola"))
        .with(Health)
        .with(Cors::permissive())
        .with(ErrorHandling)
        .register_routes(Router::new().route("/hello", get(hello)).route("/boom", get(boom)))
        .build()
}

async fn get_text(path: &str) -> (StatusCode, String) {
    let req = Request::get(path).body(Body::empty()).unwrap();
    let resp = app().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).to_string())
}

#[tokio::test]
async fn registered_routes_receive_state() {
    let (status, body) = get_text("/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ola");
}

#[tokio::test]
async fn health_plugin_answers_ok() {
    let (status, body) = get_text("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn panics_become_json_500() {
    let (status, body) = get_text("/boom").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = get_text("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
