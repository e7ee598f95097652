//! Built-in plugins for common cross-cutting concerns.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::builder::AppBuilder;
use crate::plugin::Plugin;

/// CORS plugin.
pub struct Cors {
    layer: CorsLayer,
}

impl Cors {
    /// Create a permissive CORS plugin (any origin, method, header).
    pub fn permissive() -> Self {
        Self {
            layer: crate::layers::default_cors(),
        }
    }}

impl Plugin for Cors {
    fn install<T: Clone + Send + Sync + 'static>(self, app: AppBuilder<T>) -> AppBuilder<T> {
        app.with_layer_fn(move |router| router.layer(self.layer))
    }
}

/// HTTP request/response tracing plugin.
///
/// Initialises the global `tracing` subscriber (via [`init_tracing()`]) and
/// adds a tower-http `TraceLayer` that logs requests and responses at the
/// `DEBUG` level.
///
/// [`init_tracing()`]: crate::init_tracing
pub struct Tracing;

impl Plugin for Tracing {
    fn install<T: Clone + Send + Sync + 'static>(self, app: AppBuilder<T>) -> AppBuilder<T> {
        crate::layers::init_tracing();
        app.with_layer_fn(|router| router.layer(crate::layers::default_trace()))
    }
}

/// Health-check endpoint plugin: `GET /health` → `"OK"`.
pub struct Health;

impl Plugin for Health {
    fn install<T: Clone + Send + Sync + 'static>(self, app: AppBuilder<T>) -> AppBuilder<T> {
        app.register_routes(Router::new().route("/health", get(health_handler)))
    }
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Adds a `CatchPanicLayer` that converts panics into JSON 500 responses.
pub struct ErrorHandling;

impl Plugin for ErrorHandling {
    fn install<T: Clone + Send + Sync + 'static>(self, app: AppBuilder<T>) -> AppBuilder<T> {
        app.with_layer_fn(|router| router.layer(crate::layers::catch_panic_layer()))
    }
}
