//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally loaded from a `.env`
//! file) or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Default address of the solver web application.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/rubik.html";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Solver application configuration.
    pub solver: SolverConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the solver application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Base URL every generated or opened URL is anchored to.
    pub base_url: String,

    /// Executable used to open URLs instead of the platform default.
    pub browser_command: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            browser_command: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "rubik-solver-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            solver: SolverConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_SOLVER_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("MCP_SOLVER_BASE_URL") {
            let base_url = base_url.trim();
            if !base_url.is_empty() {
                config.solver.base_url = base_url.to_string();
            }
        }

        if let Ok(command) = std::env::var("MCP_BROWSER_COMMAND") {
            let command = command.trim();
            if !command.is_empty() {
                config.solver.browser_command = Some(command.to_string());
            }
        }

        config.transport = TransportConfig::from_env();

        config
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.solver.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "solver base URL must be an http(s) URL, got '{}'",
                base_url
            )));
        }
        if base_url.contains('?') {
            return Err(Error::config(format!(
                "solver base URL must not carry a query string, got '{}'",
                base_url
            )));
        }
        Ok(())
    }
}
