//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

#[cfg(feature = "http")]
use super::error::ToolError;
use super::definitions::{
    GenerateSolverUrlTool, OpenBrowserTool, ParameterInfoTool, ValidateParametersTool,
};
use crate::domains::solver::SolverService;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    service: Arc<SolverService>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(service: Arc<SolverService>) -> Self {
        Self { service }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GenerateSolverUrlTool::NAME,
            ParameterInfoTool::NAME,
            ValidateParametersTool::NAME,
            OpenBrowserTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GenerateSolverUrlTool::to_tool(),
            ParameterInfoTool::to_tool(),
            ValidateParametersTool::to_tool(),
            OpenBrowserTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let service = self.service.clone();
        let result = match name {
            GenerateSolverUrlTool::NAME => GenerateSolverUrlTool::http_handler(arguments, service),
            ParameterInfoTool::NAME => ParameterInfoTool::http_handler(arguments, service),
            ValidateParametersTool::NAME => ValidateParametersTool::http_handler(arguments, service),
            OpenBrowserTool::NAME => OpenBrowserTool::http_handler(arguments, service),
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };
        result.map_err(ToolError::invalid_arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::solver::launcher::testing::RecordingLauncher;

    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(SolverService::with_launcher(
            "http://localhost:8000/rubik.html",
            Arc::new(RecordingLauncher::default()),
        )))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(
            names,
            vec![
                "generate_solver_url",
                "get_parameter_info",
                "validate_parameters",
                "open_browser"
            ]
        );
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.to_string()).collect();
        assert_eq!(names, test_registry().tool_names());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_generate() {
        let result = test_registry().call_tool(
            "generate_solver_url",
            serde_json::json!({ "speed": 1 }),
        );
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let result = test_registry().call_tool("unknown", serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
