//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::net::TcpListener;
use tonic::Status;

use im_gateway::config::GatewayConfig;
use im_gateway::http::HttpServer;
use im_gateway::rpc::{proto, ImService};

/// Test double for the messaging service: records every request it receives
/// and answers with a programmed reply.
pub struct RecordingImService {
    pub send_calls: Mutex<Vec<proto::SendRequest>>,
    pub pull_calls: Mutex<Vec<proto::PullRequest>>,
    send_reply: Result<proto::SendResponse, Status>,
    pull_reply: Result<proto::PullResponse, Status>,
}

impl RecordingImService {
    /// Double that succeeds with empty payloads.
    pub fn ok() -> Self {
        Self {
            send_calls: Mutex::new(Vec::new()),
            pull_calls: Mutex::new(Vec::new()),
            send_reply: Ok(proto::SendResponse {
                code: 0,
                msg: String::new(),
            }),
            pull_reply: Ok(proto::PullResponse {
                code: 0,
                msg: String::new(),
                messages: Vec::new(),
            }),
        }
    }

    /// Double whose pull call returns the given messages.
    pub fn with_messages(messages: Vec<proto::Message>) -> Self {
        let mut double = Self::ok();
        double.pull_reply = Ok(proto::PullResponse {
            code: 0,
            msg: String::new(),
            messages,
        });
        double
    }

    /// Double whose calls fail with an application-level envelope code.
    pub fn application_error(code: i32, msg: &str) -> Self {
        let mut double = Self::ok();
        double.send_reply = Ok(proto::SendResponse {
            code,
            msg: msg.to_string(),
        });
        double.pull_reply = Ok(proto::PullResponse {
            code,
            msg: msg.to_string(),
            messages: Vec::new(),
        });
        double
    }

    /// Double whose calls fail at the transport level.
    pub fn transport_error(status: Status) -> Self {
        let mut double = Self::ok();
        double.send_reply = Err(status.clone());
        double.pull_reply = Err(status);
        double
    }
}

#[async_trait]
impl ImService for RecordingImService {
    async fn send(&self, request: proto::SendRequest) -> Result<proto::SendResponse, Status> {
        self.send_calls.lock().unwrap().push(request);
        self.send_reply.clone()
    }

    async fn pull(&self, request: proto::PullRequest) -> Result<proto::PullResponse, Status> {
        self.pull_calls.lock().unwrap().push(request);
        self.pull_reply.clone()
    }
}

/// Start the gateway on an ephemeral port, backed by the given service.
pub async fn spawn_gateway(rpc: Arc<dyn ImService>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(GatewayConfig::default(), rpc);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}
