mod common;

use citei_core::prelude::StatusCode;
use common::{create_citacao, create_colecao, test_app, test_app_with};
use serde_json::json;

#[tokio::test]
async fn test_list_empty() {
    let app = test_app().await;
    app.get("/colecao")
        .send()
        .await
        .assert_ok()
        .assert_json_path("len()", 0);
}

#[tokio::test]
async fn test_create_returns_entity_with_id() {
    let app = test_app().await;
    let resp = app
        .post("/colecao")
        .json(&json!({ "title": "Poesia", "description": "Versos" }))
        .send()
        .await
        .assert_ok()
        .assert_json_path("title", "Poesia")
        .assert_json_path("description", "Versos");
    let id: i64 = resp.json_path("id");
    assert!(id > 0);
}

#[tokio::test]
async fn test_optional_description_is_omitted() {
    let app = test_app().await;
    let id = create_colecao(&app, "Poesia").await;
    app.get(&format!("/colecao/{id}"))
        .send()
        .await
        .assert_ok()
        .assert_json_path_fn("description", |v| v.is_null());
}

#[tokio::test]
async fn test_create_invalid_is_unprocessable() {
    let app = test_app().await;
    app.post("/colecao")
        .json(&json!({ "description": "sem titulo" }))
        .send()
        .await
        .assert_unprocessable()
        .assert_json_path("errors.len()", 1)
        .assert_json_path("errors[0].field", "title");

    app.get("/colecao")
        .send()
        .await
        .assert_json_path("len()", 0);
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let app = test_app().await;
    app.post("/colecao")
        .header("content-type", "application/json")
        .body("{\"title\":")
        .send()
        .await
        .assert_unprocessable()
        .assert_json_path("errors[0].field", "body");
}

#[tokio::test]
async fn test_invalid_query_is_unprocessable() {
    let app = test_app().await;
    let long = "a".repeat(256);
    app.get(&format!("/colecao?titulo={long}"))
        .send()
        .await
        .assert_unprocessable()
        .assert_json_path("errors[0].field", "titulo");
}

#[tokio::test]
async fn test_filter_by_titulo_and_alias() {
    let app = test_app().await;
    create_colecao(&app, "Poesia Moderna").await;
    create_colecao(&app, "Filosofia").await;

    app.get("/colecao?titulo=moderna")
        .send()
        .await
        .assert_ok()
        .assert_json_path("len()", 1)
        .assert_json_path("[0].title", "Poesia Moderna");

    app.get("/colecao?title=FILO")
        .send()
        .await
        .assert_ok()
        .assert_json_path("len()", 1)
        .assert_json_path("[0].title", "Filosofia");

    app.get("/colecao?titulo=")
        .send()
        .await
        .assert_ok()
        .assert_json_path("len()", 2);
}

#[tokio::test]
async fn test_get_unknown_is_not_found() {
    let app = test_app().await;
    app.get("/colecao/999")
        .send()
        .await
        .assert_not_found()
        .assert_json_path("error", "Colecao 999 not found");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = test_app().await;
    app.get("/colecao/abc")
        .send()
        .await
        .assert_bad_request()
        .assert_json_path("error", "Invalid id: abc");
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let app = test_app().await;
    let id = create_colecao(&app, "Poesia").await;

    app.put(&format!("/colecao/{id}"))
        .json(&json!({ "title": "Prosa", "description": "Contos" }))
        .send()
        .await
        .assert_ok()
        .assert_json_path("id", id)
        .assert_json_path("title", "Prosa")
        .assert_json_path("description", "Contos");

    app.put(&format!("/colecao/{id}"))
        .json(&json!({ "title": "" }))
        .send()
        .await
        .assert_unprocessable();

    app.put("/colecao/999")
        .json(&json!({ "title": "Prosa" }))
        .send()
        .await
        .assert_not_found();
}

#[tokio::test]
async fn test_delete_returns_message() {
    let app = test_app().await;
    let id = create_colecao(&app, "Poesia").await;

    app.delete(&format!("/colecao/{id}"))
        .send()
        .await
        .assert_ok()
        .assert_json_path("message", "Colecao removida com sucesso!");

    app.get(&format!("/colecao/{id}"))
        .send()
        .await
        .assert_not_found();
    app.delete(&format!("/colecao/{id}"))
        .send()
        .await
        .assert_not_found();
}

#[tokio::test]
async fn test_delete_with_citacoes_is_conflict() {
    let app = test_app().await;
    let id = create_colecao(&app, "Teatro").await;
    create_citacao(&app, "Hamlet", id).await;

    app.delete(&format!("/colecao/{id}"))
        .send()
        .await
        .assert_conflict();
    app.get(&format!("/colecao/{id}")).send().await.assert_ok();
}

#[tokio::test]
async fn test_validation_status_follows_config() {
    let app = test_app_with("validation:\n  status:\n    colecao: 400\n").await;
    app.post("/colecao")
        .json(&json!({}))
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let resp = app.get("/health").send().await.assert_ok();
    assert_eq!(resp.text(), "OK");
}

#[tokio::test]
async fn test_filter_folds_accented_letters() {
    let app = test_app().await;
    create_colecao(&app, "Coleção Ética").await;
    create_colecao(&app, "Estética").await;

    // "ética"
    app.get("/colecao?titulo=%C3%A9tica")
        .send()
        .await
        .assert_ok()
        .assert_json_path("len()", 2);

    // "COLEÇÃO"
    app.get("/colecao?titulo=COLE%C3%87%C3%83O")
        .send()
        .await
        .assert_ok()
        .assert_json_path("len()", 1)
        .assert_json_path("[0].title", "Coleção Ética");
}

#[tokio::test]
async fn test_filter_follows_updated_title() {
    let app = test_app().await;
    let id = create_colecao(&app, "Poesia").await;
    app.put(&format!("/colecao/{id}"))
        .json(&json!({ "title": "Ópera" }))
        .send()
        .await
        .assert_ok();

    app.get("/colecao?titulo=poesia")
        .send()
        .await
        .assert_json_path("len()", 0);
    app.get("/colecao?titulo=%C3%B3pera")
        .send()
        .await
        .assert_json_path("len()", 1);
}

#[tokio::test]
async fn test_title_is_stored_trimmed() {
    let app = test_app().await;
    let resp = app
        .post("/colecao")
        .json(&json!({ "title": "  Poesia  " }))
        .send()
        .await
        .assert_ok()
        .assert_json_path("title", "Poesia");
    let id: i64 = resp.json_path("id");

    app.get(&format!("/colecao/{id}"))
        .send()
        .await
        .assert_json_path("title", "Poesia");
}
