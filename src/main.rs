//! Rubik's cube solver MCP server binary.
//!
//! Reads configuration from the environment (and `.env`), sets up logging on
//! stderr, then serves on the configured transport.

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use rubik_solver_mcp_server::core::{Config, McpServer, TransportService};
use rubik_solver_mcp_server::domains::solver::parameters;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config.logging.level);

    config.validate()?;

    info!(
        "Starting {} v{} (Rubik's Cube URL generator and launcher)",
        config.server.name, config.server.version
    );
    info!("Base URL configured as: {}", config.solver.base_url);
    info!("Available parameters: {}", parameters::names().join(", "));
    if let Some(command) = &config.solver.browser_command {
        info!("Opening URLs with: {}", command);
    }

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config);

    if let Err(e) = transport.run(server).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutting down");
    Ok(())
}

/// Log to stderr; stdout carries the STDIO transport.
///
/// `RUST_LOG` wins over `MCP_LOG_LEVEL` when set. Unknown levels fall back to
/// `info`.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        known @ ("trace" | "debug" | "info" | "warn" | "error") => known.to_string(),
        _ => "info".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
