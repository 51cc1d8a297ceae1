//! HTTP-facing request and response shapes.
//!
//! These are deliberately separate types from the wire messages in
//! [`crate::rpc::proto`]: the two schemas are connected only by the explicit
//! field copies in [`crate::http::translate`], so either side can evolve
//! independently.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/send`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendRequest {
    pub chat: String,
    pub text: String,
    pub sender: String,
}

/// Query parameters of `GET /api/pull`.
///
/// `reverse` is optional; absent and `false` are distinguishable so the wire
/// request can carry presence through to the remote service.
#[derive(Debug, Clone, Deserialize)]
pub struct PullQuery {
    pub chat: String,
    pub cursor: i64,
    pub limit: i32,
    pub reverse: Option<bool>,
}

/// One element of the `GET /api/pull` response array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub chat: String,
    pub text: String,
    pub sender: String,
    pub send_time: i64,
}
