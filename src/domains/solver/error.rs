//! Solver-specific error types.

use thiserror::Error;

/// Errors that can occur while building or launching solver URLs.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The URL does not point at the configured solver application.
    #[error("Invalid URL. Must start with {base_url}\n\nProvided: {url}")]
    InvalidUrl { base_url: String, url: String },

    /// The browser launcher reported a failure.
    #[error("Failed to open browser. Error: {source}\n\nURL: {url}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

impl SolverError {
    /// Create a new "invalid URL" error.
    pub fn invalid_url(base_url: impl Into<String>, url: impl Into<String>) -> Self {
        Self::InvalidUrl {
            base_url: base_url.into(),
            url: url.into(),
        }
    }

    /// Create a new launch error.
    pub fn launch(url: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            url: url.into(),
            source,
        }
    }
}
