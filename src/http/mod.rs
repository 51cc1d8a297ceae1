//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, shared client handle)
//!     → handlers.rs (parse input, drive one RPC call, inspect envelope)
//!     → translate.rs (field-for-field schema mapping, both directions)
//!     → JSON response to client
//! ```

pub mod handlers;
pub mod request;
pub mod server;
pub mod translate;
pub mod types;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
