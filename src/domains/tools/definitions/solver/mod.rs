//! Tools backed by the solver service.
//!
//! Every tool here is a plain `execute(&Params, &SolverService)` function;
//! [`solver_route`] and [`http_call`] adapt it to rmcp and to the HTTP
//! transport.

pub mod generate_url;
pub mod open_browser;
pub mod parameter_info;
pub mod validate;

pub use generate_url::GenerateSolverUrlTool;
pub use open_browser::{OpenBrowserParams, OpenBrowserTool};
pub use parameter_info::{ParameterInfoParams, ParameterInfoTool};
pub use validate::ValidateParametersTool;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::domains::solver::SolverService;

/// Signature shared by every solver tool.
pub type Execute<P> = fn(&P, &SolverService) -> CallToolResult;

/// Route a tool through rmcp, decoding its arguments into `P`.
pub fn solver_route<S, P>(tool: Tool, service: Arc<SolverService>, execute: Execute<P>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let service = service.clone();
        async move {
            let params: P = serde_json::from_value(serde_json::Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(execute(&params, &service))
        }
        .boxed()
    })
}

/// Run a tool for the HTTP transport and shape the result as MCP JSON.
#[cfg(feature = "http")]
pub fn http_call<P>(
    arguments: serde_json::Value,
    service: &SolverService,
    execute: Execute<P>,
) -> Result<serde_json::Value, String>
where
    P: DeserializeOwned,
{
    let params: P =
        serde_json::from_value(arguments).map_err(|e| format!("Invalid parameters: {}", e))?;
    let result = execute(&params, service);

    Ok(serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    }))
}

#[cfg(test)]
pub(crate) mod test_support {
    use rmcp::model::{CallToolResult, RawContent};

    pub const BASE: &str = "http://localhost:8000/rubik.html";

    pub fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }
}
