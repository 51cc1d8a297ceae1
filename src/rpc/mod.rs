//! RPC client subsystem.
//!
//! # Data Flow
//! ```text
//! handler builds im::SendRequest / im::PullRequest
//!     → client.rs (unary call over shared Channel, 1s deadline)
//!     → remote messaging service
//!     → response envelope (code, msg, payload) back to handler
//! ```
//!
//! # Design Decisions
//! - One channel built at startup, shared read-only by all handlers
//! - Address resolution is the transport's job; this crate only supplies
//!   the configured host:port
//! - `ImService` trait at the seam so tests substitute doubles

pub mod client;
pub mod proto;

pub use client::{connect, ImClient, ImService};
