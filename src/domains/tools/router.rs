//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires them
//! to the shared solver service.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    GenerateSolverUrlTool, OpenBrowserTool, ParameterInfoTool, ValidateParametersTool,
};
use crate::domains::solver::SolverService;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(service: Arc<SolverService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GenerateSolverUrlTool::create_route(service.clone()))
        .with_route(ParameterInfoTool::create_route(service.clone()))
        .with_route(ValidateParametersTool::create_route(service.clone()))
        .with_route(OpenBrowserTool::create_route(service))
}
