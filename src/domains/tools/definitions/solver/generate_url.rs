//! Generate solver URL tool definition.
//!
//! Builds a URL for the cube solver page from speed, moves and solve
//! parameters.

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

// ============================================================================
// Tool Definition
// ============================================================================

/// Generate URL tool - builds a solver URL with query parameters.
pub struct GenerateSolverUrlTool;

impl GenerateSolverUrlTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "generate_solver_url";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a URL for the Rubik's Cube solver application. \
        Optional parameters: speed (1-5 animation speed), moves (initial move sequence such as \"D F R' 2U\"), \
        solve (0/1, start solving immediately). Omitted parameters are left out of the URL.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(speed = ?params.speed, solve = ?params.solve))]
    pub fn execute(params: &SolverParams, service: &SolverService) -> CallToolResult {
        info!("Generate solver URL tool called");

        CallToolResult::success(vec![Content::text(service.build_url(params))])
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::solver::test_support::{BASE, text_of};
    use crate::domains::solver::launcher::testing::RecordingLauncher;

    fn test_service() -> SolverService {
        SolverService::with_launcher(
            BASE,
            Arc::new(RecordingLauncher::default()),
        )
    }

    #[test]
    fn test_generate_url_execute() {
        let params: SolverParams =
            serde_json::from_value(serde_json::json!({ "speed": 3, "moves": "D F R" })).unwrap();

        let result = GenerateSolverUrlTool::execute(&params, &test_service());
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(
            text_of(&result),
            "http://localhost:8000/rubik.html?speed=3&moves=D+F+R"
        );
    }

    #[test]
    fn test_generate_url_no_arguments() {
        let params: SolverParams = serde_json::from_value(serde_json::json!({})).unwrap();
        let result = GenerateSolverUrlTool::execute(&params, &test_service());
        assert_eq!(text_of(&result), "http://localhost:8000/rubik.html?");
    }

    #[test]
    fn test_null_arguments_are_omitted() {
        let params: SolverParams =
            serde_json::from_value(serde_json::json!({ "speed": null, "solve": null })).unwrap();
        assert!(params.speed.is_none());
        assert!(params.solve.is_none());
    }

    #[test]
    fn test_wrong_argument_type_rejected() {
        let result: Result<SolverParams, _> =
            serde_json::from_value(serde_json::json!({ "speed": "fast" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_tool_metadata() {
        let tool = GenerateSolverUrlTool::to_tool();
        assert_eq!(tool.name, "generate_solver_url");
        assert!(tool.input_schema.contains_key("properties"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_generate_url_http_handler() {
        let args = serde_json::json!({ "speed": 2 });
        let result = GenerateSolverUrlTool::http_handler(args, Arc::new(test_service()));
        let value = result.unwrap();
        assert_eq!(value["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_generate_url_http_handler_bad_param() {
        let args = serde_json::json!({ "solve": "yes" });
        let result = GenerateSolverUrlTool::http_handler(args, Arc::new(test_service()));
        assert!(result.is_err());
    }
}
