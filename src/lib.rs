//! HTTP gateway for the instant-messaging RPC service.
//!
//! Translates REST-style JSON requests into unary RPC calls and the RPC
//! responses back into JSON. One RPC per HTTP request, no retries, no
//! caching, no state outliving a request.

pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod rpc;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use http::HttpServer;
pub use rpc::{ImClient, ImService};
