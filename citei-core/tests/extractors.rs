use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use citei_core::prelude::*;
use http_body_util::BodyExt;
use serde::Deserialize;
use tower::ServiceExt;

#[derive(Debug, Deserialize, Validate)]
struct ItemRequest {
    #[garde(required, length(min = 1, max = 10), custom(not_blank))]
    title: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
struct ItemQuery {
    #[garde(length(max = 3))]
    titulo: Option<String>,
}

async fn create(ValidatedJson(body): ValidatedJson<ItemRequest>) -> Result<Json<serde_json::Value>, HttpError> {
    let payload = body.or_reject(StatusCode::UNPROCESSABLE_ENTITY)?;
    Ok(Json(serde_json::json!({ "title": payload.title })))
}

async fn list(ValidatedQuery(query): ValidatedQuery<ItemQuery>) -> Result<Json<serde_json::Value>, HttpError> {
    let query = query.or_reject(StatusCode::BAD_REQUEST)?;
    Ok(Json(serde_json::json!({ "titulo": query.titulo })))
}

async fn show(Id(id): Id) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "id": id }))
}

fn app() -> Router {
    Router::new()
        .route("/items", post(create).get(list))
        .route("/items/{id}", get(show))
}

async fn send(req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn post_json(body: &str) -> Request<Body> {
    Request::post("/items")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn valid_body_reaches_handler() {
    let (status, body) = send(post_json(r#"{"title":"ok"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "ok");
}

#[tokio::test]
async fn missing_field_is_a_field_error() {
    let (status, body) = send(post_json("{}")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"][0]["field"], "title");
    assert_eq!(body["errors"][0]["code"], "validation");
}

#[tokio::test]
async fn malformed_json_is_a_body_error() {
    let (status, body) = send(post_json("{not json")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"][0]["field"], "body");
    assert_eq!(body["errors"][0]["code"], "invalid_json");
}

#[tokio::test]
async fn wrong_type_is_a_body_error() {
    let (status, body) = send(post_json(r#"{"title": 12}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
    assert_eq!(body["errors"][0]["field"], "body");
}

#[tokio::test]
async fn query_is_validated() {
    let req = Request::get("/items?titulo=abcdef").body(Body::empty()).unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "titulo");

    let req = Request::get("/items?titulo=abc").body(Body::empty()).unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["titulo"], "abc");
}

#[tokio::test]
async fn numeric_id_is_extracted() {
    let req = Request::get("/items/42").body(Body::empty()).unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 42);
}

#[tokio::test]
async fn malformed_id_goes_through_http_error() {
    let req = Request::get("/items/abc").body(Body::empty()).unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid id: abc");
}
