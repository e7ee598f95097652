use axum::Router;
use tracing::info;

use crate::plugin::Plugin;

type LayerFn = Box<dyn FnOnce(Router) -> Router + Send>;

/// Builder for assembling the application.
///
/// Collects state, controller routes, and Tower layers, then produces an
/// `axum::Router` (or starts serving directly) with everything wired together.
///
/// ```ignore
/// AppBuilder::new(state)
///     .with(Tracing)
///     .with(ErrorHandling)
///     .register_routes(ColecaoController::routes())
///     .serve("0.0.0.0:3333")
///     .await?;
/// ```
pub struct AppBuilder<T: Clone + Send + Sync + 'static> {
    state: T,
    routes: Vec<Router<T>>,
    layers: Vec<LayerFn>,
}

impl<T: Clone + Send + Sync + 'static> AppBuilder<T> {
    pub fn new(state: T) -> Self {
        Self {
            state,
            routes: Vec::new(),
            layers: Vec::new(),
        }
    }

    /// Install a [`Plugin`].
    pub fn with<Pl: Plugin>(self, plugin: Pl) -> Self {
        tracing::debug!(plugin = Pl::name(), "installing plugin");
        plugin.install(self)
    }

    /// Apply a transformation to the final, state-applied router.
    ///
    /// Layers run in registration order, so the last one registered is the
    /// outermost.
    pub fn with_layer_fn<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Router) -> Router + Send + 'static,
    {
        self.layers.push(Box::new(f));
        self
    }

    /// Merge a router fragment (typically a controller's routes).
    pub fn register_routes(mut self, router: Router<T>) -> Self {
        self.routes.push(router);
        self
    }

    /// Access the application state.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Assemble the final router.
    pub fn build(self) -> Router {
        let mut router = Router::new();
        for r in self.routes {
            router = router.merge(r);
        }

        let mut app = router.with_state(self.state);
        for layer_fn in self.layers {
            app = layer_fn(app);
        }
        app
    }

    /// Build the application and serve it on `addr` until Ctrl-C / SIGTERM.
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.build();
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(addr = %listener.local_addr()?, "Citei server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Citei server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
