//! In-process HTTP testing for Citei routers.
//!
//! ```ignore
//! let app = TestApp::new(router);
//! app.post("/colecao")
//!     .json(&json!({ "title": "Poemas" }))
//!     .send()
//!     .await
//!     .assert_ok()
//!     .assert_json_path("title", "Poemas");
//! ```

mod app;

pub use app::{resolve_path, tokenize_path, PathToken, TestApp, TestRequest, TestResponse};
