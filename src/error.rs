//! Gateway error types.
//!
//! Every handler failure is terminal: it maps to exactly one HTTP response
//! and the request ends. Nothing here is retried or recovered.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures a request can hit on its way through the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Client input could not be parsed; the remote service is never called.
    #[error("failed to parse request: {0}")]
    BadRequest(String),

    /// The remote service could not be reached (connect failure, deadline
    /// expiry, protocol error).
    #[error("rpc transport error: {0}")]
    RemoteTransport(String),

    /// The remote service answered with a non-zero envelope code.
    #[error("rpc error {code}: {msg}")]
    RemoteApplication { code: i32, msg: String },
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            GatewayError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            GatewayError::RemoteTransport(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "RPC_UNAVAILABLE", msg)
            }
            GatewayError::RemoteApplication { msg, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "RPC_ERROR", msg)
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
