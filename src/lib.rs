//! Rubik's cube solver MCP server.
//!
//! This crate exposes a browser-based Rubik's cube solver to MCP clients. It
//! builds solver URLs from animation speed, initial moves and auto-solve
//! parameters, validates those parameters and opens the result in a browser.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **solver**: parameter catalog, URL building, validation, browser launching
//!   - **tools**: MCP tools wrapping the solver service
//!   - **resources**: parameter catalog and server info resources
//!   - **prompts**: prompts that drive the solver tools
//!
//! # Example
//!
//! ```rust,no_run
//! use rubik_solver_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
