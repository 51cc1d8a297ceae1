//! IM HTTP gateway binary.
//!
//! Bootstraps the process: loads configuration, initializes logging and
//! metrics, builds the shared RPC client handle, and runs the HTTP server
//! until shutdown.
//!
//! Configuration is read from the TOML file named by `GATEWAY_CONFIG`;
//! built-in defaults apply when the variable is unset.

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use im_gateway::config::{load_config, GatewayConfig};
use im_gateway::http::HttpServer;
use im_gateway::observability::{logging, metrics};
use im_gateway::rpc::{self, ImClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::var("GATEWAY_CONFIG") {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => GatewayConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("im-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        rpc_backend = %config.rpc.backend_address,
        rpc_timeout_secs = config.rpc.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // One channel for the whole process; handlers share the client handle.
    let channel = rpc::connect(&config.rpc)?;
    let client = Arc::new(ImClient::new(channel));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config, client);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
