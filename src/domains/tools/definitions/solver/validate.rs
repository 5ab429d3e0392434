//! Validate parameters tool definition.
//!
//! Checks speed, moves and solve values against the parameter catalog and
//! returns a line-per-parameter report.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use std::sync::Arc;
use tracing::{info, instrument};

#[cfg(feature = "http")]
use super::http_call;
use super::solver_route;
use crate::domains::solver::{SolverParams, SolverService};

/// Validate tool - reports whether parameters are within their ranges.
pub struct ValidateParametersTool;

impl ValidateParametersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "validate_parameters";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Validate Rubik's Cube solver parameters (speed, moves, solve) \
        against their allowed ranges. Returns a report with one line per parameter and an overall verdict.";

    /// Execute the tool logic.
    ///
    /// Invalid values are part of a normal report, never a tool error.
    #[instrument(skip_all)]
    pub fn execute(params: &SolverParams, service: &SolverService) -> CallToolResult {
        info!("Validate parameters tool called");
        let report = service.validate(params);
        CallToolResult::success(vec![Content::text(report.to_string())])
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
            input_schema: cached_schema_for_type::<SolverParams>(),
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
