//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` answers MCP requests by handing them to the solver, resource
//! and prompt services. Tool calls never reach this file: `#[tool_handler]`
//! routes them through the router from `domains::tools`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    prompts::{PromptService, string_arguments},
    resources::ResourceService,
    solver::SolverService,
    tools::build_tool_router,
};

/// Instructions reported to clients during initialization.
pub const SERVER_INSTRUCTIONS: &str = "Generates and opens URLs for a browser-based Rubik's cube solver. \
    Use get_parameter_info to learn the parameters, validate_parameters to check values, \
    generate_solver_url to build a URL and open_browser to launch it.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service building and launching solver URLs.
    solver: Arc<SolverService>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let solver = Arc::new(SolverService::new(&config.solver));
        Self::with_solver(config, solver)
    }

    /// Create a new MCP server around an existing solver service.
    pub fn with_solver(config: Config, solver: Arc<SolverService>) -> Self {
        let config = Arc::new(config);

        let resource_service = Arc::new(ResourceService::new(
            config.server.clone(),
            solver.clone(),
        ));
        let prompt_service = Arc::new(PromptService::new());

        Self {
            tool_router: build_tool_router::<Self>(solver.clone()),
            config,
            solver,
            resource_service,
            prompt_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the solver service.
    pub fn solver(&self) -> &Arc<SolverService> {
        &self.solver
    }

    /// Get the resource service.
    pub fn resources(&self) -> &Arc<ResourceService> {
        &self.resource_service
    }

    /// Get the prompt service.
    pub fn prompts(&self) -> &Arc<PromptService> {
        &self.prompt_service
    }

    /// Tools advertised by the router, in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.as_ref().map(string_arguments);
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::solver::launcher::testing::RecordingLauncher;

    fn test_server() -> (McpServer, Arc<RecordingLauncher>) {
        let config = Config::default();
        let launcher = Arc::new(RecordingLauncher::default());
        let solver = Arc::new(SolverService::with_launcher(
            config.solver.base_url.clone(),
            launcher.clone(),
        ));
        (McpServer::with_solver(config, solver), launcher)
    }

    #[test]
    fn test_server_lists_all_tools() {
        let (server, _) = test_server();
        let names: Vec<String> = server.tools().into_iter().map(|t| t.name.to_string()).collect();
        assert_eq!(names.len(), 4);
        for expected in [
            "generate_solver_url",
            "get_parameter_info",
            "validate_parameters",
            "open_browser",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_server_info() {
        let (server, _) = test_server();
        let info = server.get_info();
        assert_eq!(info.instructions.as_deref(), Some(SERVER_INSTRUCTIONS));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
    }

    #[test]
    fn test_server_identity_from_config() {
        let (server, _) = test_server();
        assert_eq!(server.name(), "rubik-solver-mcp");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(server.solver().base_url(), server.config().solver.base_url);
    }

    #[tokio::test]
    async fn test_server_reads_parameter_resource() {
        let (server, _) = test_server();
        let resources = server.resources();
        assert!(resources.read_resource("rubik://solver/parameters").await.is_ok());
        assert!(resources.read_resource("rubik://nope").await.is_err());
    }

    #[test]
    fn test_server_shares_solver_launcher() {
        let (server, launcher) = test_server();
        let url = "http://localhost:8000/rubik.html?speed=3";
        server.solver().open_in_browser(url).unwrap();
        assert_eq!(launcher.opened(), vec![url.to_string()]);
    }
}
