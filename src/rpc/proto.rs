//! Wire messages for the `im` RPC package.
//!
//! Hand-maintained prost definitions mirroring `proto/im.proto`. Field tags
//! must match the remote service exactly; change them only together with the
//! proto file.

/// A stored chat message as the remote service returns it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(string, tag = "1")]
    pub chat: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub text: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub sender: ::prost::alloc::string::String,
    #[prost(int64, tag = "4")]
    pub send_time: i64,
}

/// Send call request. The RPC schema nests the three message fields under
/// `message`; the HTTP schema keeps them flat.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendRequest {
    #[prost(message, optional, tag = "1")]
    pub message: ::core::option::Option<Message>,
}

/// Send call response envelope. `code == 0` means success; any other value
/// is an application-level failure described by `msg`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
}

/// Pull call request. `reverse` is proto3-optional so absent and `false`
/// stay distinguishable on the wire.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PullRequest {
    #[prost(string, tag = "1")]
    pub chat: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub cursor: i64,
    #[prost(int32, tag = "3")]
    pub limit: i32,
    #[prost(bool, optional, tag = "4")]
    pub reverse: ::core::option::Option<bool>,
}

/// Pull call response envelope plus payload.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PullResponse {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub msg: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub messages: ::prost::alloc::vec::Vec<Message>,
}
