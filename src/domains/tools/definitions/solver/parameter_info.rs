//! Parameter info tool definition.

use rmcp::{
    handler::server::tool::{ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[cfg(feature = "http")]
use super::http_call;
use super::solver_route;
use crate::domains::solver::SolverService;

/// The parameter info tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ParameterInfoParams {}

/// Parameter info tool - describes the solver's parameter catalog.
pub struct ParameterInfoTool;

impl ParameterInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_parameter_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get information about the Rubik's Cube solver parameters: \
        descriptions, data types, valid ranges, length limits and default values.";

    /// Execute the tool logic.
    pub fn execute(_params: &ParameterInfoParams, service: &SolverService) -> CallToolResult {
        info!("Parameter info tool called");
        CallToolResult::success(vec![Content::text(service.describe_parameters())])
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
            input_schema: cached_schema_for_type::<ParameterInfoParams>(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::solver::launcher::testing::RecordingLauncher;

    #[test]
    fn test_parameter_info_execute() {
        let service = SolverService::with_launcher(
            "http://localhost:8000/rubik.html",
            Arc::new(RecordingLauncher::default()),
        );
        let result = ParameterInfoTool::execute(&ParameterInfoParams::default(), &service);
        assert!(!result.is_error.unwrap_or(false));

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.contains("SPEED:"));
        assert!(text.contains("MOVES:"));
        assert!(text.contains("SOLVE:"));
    }
}
