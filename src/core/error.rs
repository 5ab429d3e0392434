//! Crate-wide error type.
//!
//! Domain errors convert into [`Error`] with `?`.

use thiserror::Error;

/// Result alias over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Any error the server can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// URL building or browser launch failed.
    #[error("Solver error: {0}")]
    Solver(#[from] crate::domains::solver::SolverError),

    /// Tool dispatch failed.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// A resource could not be read.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// A prompt could not be rendered.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// The transport failed to start or stopped abnormally.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Invalid configuration, reported before any transport starts.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for [`Error::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
