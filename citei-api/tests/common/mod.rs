use citei_core::prelude::*;
use citei_test::TestApp;
use serde_json::json;

#[allow(dead_code)]
/// App on a fresh in-memory database with the given config overrides.
pub async fn test_app_with(yaml: &str) -> TestApp {
    let mut config = CiteiConfig::from_yaml_str(yaml, "test").unwrap();
    config.set(
        "database.url",
        citei_core::ConfigValue::String("sqlite::memory:".into()),
    );
    let state = citei_api::bootstrap(&config).await.unwrap();
    TestApp::from_builder(citei_api::app(state))
}

#[allow(dead_code)]
pub async fn test_app() -> TestApp {
    test_app_with("{}").await
}

/// Create a collection and return its id.
pub async fn create_colecao(app: &TestApp, title: &str) -> i64 {
    app.post("/colecao")
        .json(&json!({ "title": title }))
        .send()
        .await
        .assert_ok()
        .json_path("id")
}

#[allow(dead_code)]
pub async fn create_citacao(app: &TestApp, title: &str, colecao_id: i64) -> i64 {
    app.post("/citacao")
        .json(&json!({ "title": title, "colecaoId": colecao_id }))
        .send()
        .await
        .assert_ok()
        .json_path("id")
}
