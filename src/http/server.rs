//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the three endpoint handlers
//! - Wire up middleware (tracing, request timeout, request ID, metrics)
//! - Inject the shared RPC client handle into handlers
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::observability::metrics;
use crate::rpc::ImService;

/// Application state injected into handlers.
///
/// The RPC client handle is built once at startup and shared read-only by
/// every request-handling task.
#[derive(Clone)]
pub struct AppState {
    pub rpc: Arc<dyn ImService>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server around a client for the messaging service.
    pub fn new(config: GatewayConfig, rpc: Arc<dyn ImService>) -> Self {
        let state = AppState { rpc };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/ping", get(handlers::ping))
            .route("/api/send", post(handlers::send_message))
            .route("/api/pull", get(handlers::pull_message))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(propagate_request_id_layer())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(axum::middleware::from_fn(metrics::track)),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
