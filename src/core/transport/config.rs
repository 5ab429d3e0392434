//! Transport selection and per-transport settings.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

#[cfg(any(feature = "tcp", feature = "http"))]
const DEFAULT_HOST: &str = "127.0.0.1";

#[cfg(feature = "http")]
const DEFAULT_RPC_PATH: &str = "/mcp";

/// Which transport to serve on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// MCP over stdin/stdout; the client owns the process.
    #[cfg(feature = "stdio")]
    Stdio,

    /// Newline-delimited JSON-RPC over TCP sockets.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Path of the JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Send permissive CORS headers so browser pages can call the server.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    DEFAULT_RPC_PATH.to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn env_or(key: &str, default: impl FnOnce() -> String) -> String {
    std::env::var(key).unwrap_or_else(|_| default())
}

/// Port from the environment; unset or unparsable values use `default`.
#[cfg(any(feature = "tcp", feature = "http"))]
fn env_port(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(default)
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            Self::Stdio
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            Self::Tcp(TcpConfig::default())
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            Self::Http(HttpConfig::default())
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: default_host(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Read the transport from `MCP_TRANSPORT` and its `MCP_TCP_*` or
    /// `MCP_HTTP_*` settings.
    ///
    /// Unknown names, and transports not compiled in, select the default.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                port: env_port("MCP_TCP_PORT", DEFAULT_TCP_PORT),
                host: env_or("MCP_TCP_HOST", default_host),
            }),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig {
                port: env_port("MCP_HTTP_PORT", DEFAULT_HTTP_PORT),
                host: env_or("MCP_HTTP_HOST", default_host),
                rpc_path: env_or("MCP_HTTP_PATH", default_rpc_path),
                enable_cors: std::env::var("MCP_HTTP_CORS")
                    .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0"))
                    .unwrap_or_else(|_| default_cors()),
            }),
            _ => Self::default(),
        }
    }
}

impl fmt::Display for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => write!(f, "STDIO (standard MCP mode)"),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => write!(f, "TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => write!(f, "HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        let config = TransportConfig::default();
        assert!(matches!(config, TransportConfig::Stdio));
        assert_eq!(config.to_string(), "STDIO (standard MCP mode)");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rpc_path, "/mcp");
        assert!(config.enable_cors);
        assert_eq!(
            TransportConfig::Http(config).to_string(),
            "HTTP on 127.0.0.1:8080/mcp"
        );
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_display() {
        let config = TransportConfig::Tcp(TcpConfig::default());
        assert_eq!(config.to_string(), "TCP on 127.0.0.1:3000");
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_config_deserializes_with_default_host() {
        let config: TransportConfig =
            serde_json::from_str(r#"{ "type": "tcp", "port": 4000 }"#).unwrap();
        match config {
            TransportConfig::Tcp(tcp) => {
                assert_eq!(tcp.port, 4000);
                assert_eq!(tcp.host, "127.0.0.1");
            }
            #[allow(unreachable_patterns)]
            other => panic!("expected tcp, got {}", other),
        }
    }
}
