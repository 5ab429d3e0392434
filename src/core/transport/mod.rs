//! Transports the solver server can be reached over.
//!
//! - `stdio` (default feature): the client spawns the server and talks over
//!   stdin/stdout
//! - `tcp`: one MCP session per accepted socket
//! - `http`: stateless JSON-RPC over POST, served by axum
//!
//! `MCP_TRANSPORT` picks one of the compiled-in transports at startup.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
