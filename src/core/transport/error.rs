//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures while starting or running a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listening socket could not be bound.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The rmcp session could not be set up.
    #[error("Server initialization error: {0}")]
    InitError(String),

    /// axum stopped serving.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The rmcp session task ended abnormally.
    #[error("Service error: {0}")]
    ServiceError(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::BindError {
            address: address.into(),
            source,
        }
    }

    pub fn init(msg: impl Into<String>) -> Self {
        Self::InitError(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::HttpError(msg.into())
    }
}
