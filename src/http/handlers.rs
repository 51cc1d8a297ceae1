//! Endpoint handlers.
//!
//! Each handler is one linear pipeline: parse the client input, build the
//! RPC request, make a single unary call, inspect the envelope, respond.
//! Two terminal outcomes only — a success response or a [`GatewayError`] —
//! with no retries and no partial results.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::{GatewayError, GatewayResult};
use crate::http::server::AppState;
use crate::http::translate;
use crate::http::types::{PullQuery, SendRequest};

/// GET /ping — liveness probe.
pub async fn ping() -> impl IntoResponse {
    Json(json!({ "message": "pong" }))
}

/// POST /api/send — store one message.
pub async fn send_message(
    State(state): State<AppState>,
    body: Bytes,
) -> GatewayResult<impl IntoResponse> {
    let req: SendRequest = serde_json::from_slice(&body)
        .map_err(|e| GatewayError::BadRequest(format!("failed to parse request body: {e}")))?;

    tracing::debug!(chat = %req.chat, sender = %req.sender, "forwarding send");

    let resp = state
        .rpc
        .send(translate::send_to_rpc(req))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "send rpc failed");
            GatewayError::RemoteTransport(e.to_string())
        })?;

    if resp.code != 0 {
        return Err(GatewayError::RemoteApplication {
            code: resp.code,
            msg: resp.msg,
        });
    }

    Ok(StatusCode::OK)
}

/// GET /api/pull — fetch a page of messages from a chat.
pub async fn pull_message(
    State(state): State<AppState>,
    query: Result<Query<PullQuery>, QueryRejection>,
) -> GatewayResult<impl IntoResponse> {
    let Query(query) = query.map_err(|e| {
        GatewayError::BadRequest(format!("failed to parse request parameters: {}", e.body_text()))
    })?;

    tracing::debug!(chat = %query.chat, cursor = query.cursor, limit = query.limit, "forwarding pull");

    let resp = state
        .rpc
        .pull(translate::pull_to_rpc(query))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "pull rpc failed");
            GatewayError::RemoteTransport(e.to_string())
        })?;

    if resp.code != 0 {
        return Err(GatewayError::RemoteApplication {
            code: resp.code,
            msg: resp.msg,
        });
    }

    Ok(Json(translate::messages_from_rpc(resp.messages)))
}
