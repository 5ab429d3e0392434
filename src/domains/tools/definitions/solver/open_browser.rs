//! Open browser tool definition.
//!
//! Opens an already-built solver URL in the host's default browser. Only URLs
//! under the configured base URL are accepted.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[cfg(feature = "http")]
use super::http_call;
use super::solver_route;
use crate::domains::solver::SolverService;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the open browser tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OpenBrowserParams {
    /// The complete URL to open. Must start with the solver application's base URL.
    pub url: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Open browser tool - launches a solver URL.
pub struct OpenBrowserTool;

impl OpenBrowserTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "open_browser";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Open a Rubik's Cube solver URL in the default browser. \
        The URL must start with the application's base URL; use generate_solver_url to build one.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(url = %params.url))]
    pub fn execute(params: &OpenBrowserParams, service: &SolverService) -> CallToolResult {
        info!("Open browser tool called");

        match service.open_in_browser(&params.url) {
            Ok(message) => CallToolResult::success(vec![Content::text(format!("✓ {}", message))]),
            Err(e) => {
                warn!("Open browser failed: {}", e);
                CallToolResult::error(vec![Content::text(format!("✗ {}", e))])
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        service: Arc<SolverService>,
    ) -> Result<serde_json::Value, String> {
        http_call(arguments, &service, Self::execute)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<OpenBrowserParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(service: Arc<SolverService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        solver_route(Self::to_tool(), service, Self::execute)
    }
}
