//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, timeouts)
//! - Serve on a provided listener with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{any, get};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::identity::ProcessIdentity;
use crate::ops::OpsCounter;

/// Application state injected into handlers.
///
/// Bundles the per-process identity, the shared ops counter, and the metrics
/// scrape handle; constructed once at startup and cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub identity: ProcessIdentity,
    pub ops: Arc<OpsCounter>,
    pub metrics: PrometheusHandle,
}

/// HTTP server for the demo application.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and state.
    pub fn new(config: &AppConfig, state: AppState) -> Self {
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/hello", any(handlers::hello))
            .route("/post", any(handlers::post))
            .route("/web", any(handlers::web));

        if config.observability.metrics_enabled {
            router = router.route("/metrics", get(handlers::metrics));
        }

        router
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once the shutdown signal arrives and in-flight requests have
    /// drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
