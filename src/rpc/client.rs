//! Unary gRPC client for the remote messaging service.
//!
//! # Responsibilities
//! - Build the transport channel from configuration (fixed 1s deadline)
//! - Issue `Send` and `Pull` unary calls
//! - Expose the `ImService` trait seam so handlers and tests can share one
//!   interface
//!
//! # Design Decisions
//! - The client is hand-written in the shape tonic's codegen emits; the
//!   contract is small enough that build-time codegen buys nothing
//! - The channel connects lazily, so an unreachable backend surfaces as a
//!   per-call transport error rather than a startup failure

use std::time::Duration;

use async_trait::async_trait;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::{GrpcMethod, Status};

use crate::config::RpcConfig;
use crate::rpc::proto;

/// Client interface for the messaging service.
///
/// Implemented by [`ImClient`] for production and by recording doubles in
/// tests. Errors are transport-level only; application-level failures travel
/// inside the response envelope's `code`/`msg` fields.
#[async_trait]
pub trait ImService: Send + Sync {
    /// Store one message.
    async fn send(&self, request: proto::SendRequest) -> Result<proto::SendResponse, Status>;

    /// Fetch a page of messages from a chat.
    async fn pull(&self, request: proto::PullRequest) -> Result<proto::PullResponse, Status>;
}

/// Build the transport channel for the messaging service.
///
/// The deadline applies to every call made over the channel; deadline expiry
/// surfaces as a transport error on the call.
pub fn connect(config: &RpcConfig) -> Result<Channel, tonic::transport::Error> {
    let endpoint = Endpoint::from_shared(format!("http://{}", config.backend_address))?
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs));
    Ok(endpoint.connect_lazy())
}

/// gRPC client for the `im.ImService` service.
#[derive(Debug, Clone)]
pub struct ImClient {
    inner: tonic::client::Grpc<Channel>,
}

impl ImClient {
    /// Wrap an established channel.
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    async fn send_inner(
        &self,
        request: proto::SendRequest,
    ) -> Result<proto::SendResponse, Status> {
        let mut grpc = self.inner.clone();
        grpc.ready()
            .await
            .map_err(|e| Status::unknown(format!("service not ready: {e}")))?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static("/im.ImService/Send");
        let mut req = tonic::Request::new(request);
        req.extensions_mut()
            .insert(GrpcMethod::new("im.ImService", "Send"));
        grpc.unary(req, path, codec).await.map(|r| r.into_inner())
    }

    async fn pull_inner(
        &self,
        request: proto::PullRequest,
    ) -> Result<proto::PullResponse, Status> {
        let mut grpc = self.inner.clone();
        grpc.ready()
            .await
            .map_err(|e| Status::unknown(format!("service not ready: {e}")))?;
        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static("/im.ImService/Pull");
        let mut req = tonic::Request::new(request);
        req.extensions_mut()
            .insert(GrpcMethod::new("im.ImService", "Pull"));
        grpc.unary(req, path, codec).await.map(|r| r.into_inner())
    }
}

#[async_trait]
impl ImService for ImClient {
    async fn send(&self, request: proto::SendRequest) -> Result<proto::SendResponse, Status> {
        self.send_inner(request).await
    }

    async fn pull(&self, request: proto::PullRequest) -> Result<proto::PullResponse, Status> {
        self.pull_inner(request).await
    }
}
