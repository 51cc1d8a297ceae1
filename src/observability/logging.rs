//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - `RUST_LOG` wins when set; otherwise the configured level applies to the
//!   gateway and to tower-http's request traces

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Call once at startup.
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("im_gateway={log_level},tower_http={log_level}").into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
