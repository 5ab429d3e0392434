//! Server plumbing shared by every domain: configuration, the unified error
//! type, the rmcp handler and the transports.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
