//! Listing and reading of solver resources.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::definitions::PARAMETER_TEMPLATE_PREFIX;
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::ServerConfig;
use crate::domains::solver::{PARAMETERS, SolverService, parameters};
use crate::domains::tools::ToolRegistry;

/// Serves the registered resources and the per-parameter template.
pub struct ResourceService {
    /// Identification reported by the server info resource.
    server: ServerConfig,

    /// Solver service, for the base URL.
    solver: Arc<SolverService>,

    /// Registered resources keyed by URI.
    resources: HashMap<String, ResourceEntry>,

    templates: Vec<ResourceTemplate>,
}

/// A registered resource and its content source.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub resource: Resource,
    pub content: ResourceContent,
}

/// What a resource renders; every body is built from live state on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceContent {
    /// Server identification and capabilities.
    ServerInfo,

    /// The solver parameter catalog.
    ParameterCatalog,
}

impl ResourceService {
    pub fn new(server: ServerConfig, solver: Arc<SolverService>) -> Self {
        let mut service = Self {
            server,
            solver,
            resources: HashMap::new(),
            templates: get_all_resource_templates(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        info!(
            "ResourceService ready: {} resources, {} templates",
            service.resources.len(),
            service.templates.len()
        );

        service
    }

    /// Register a resource, replacing any entry with the same URI.
    fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Registered URIs are looked up first, then the single-parameter
    /// template is tried.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let content = match self.resources.get(uri) {
            Some(entry) => self.render(uri, entry.content)?,
            None => self.resolve_parameter_template(uri)?,
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Render a resource as pretty-printed JSON.
    fn render(&self, uri: &str, content: ResourceContent) -> Result<ResourceContents, ResourceError> {
        let value = match content {
            ResourceContent::ServerInfo => serde_json::json!({
                "name": self.server.name,
                "version": self.server.version,
                "base_url": self.solver.base_url(),
                "tools": ToolRegistry::get_all_tools()
                    .into_iter()
                    .map(|t| t.name.to_string())
                    .collect::<Vec<_>>(),
                "parameters": parameters::names(),
            }),
            ResourceContent::ParameterCatalog => serde_json::json!({
                "base_url": self.solver.base_url(),
                "parameters": PARAMETERS,
            }),
        };

        Ok(ResourceContents::text(
            serde_json::to_string_pretty(&value)?,
            uri,
        ))
    }

    /// Resolve `rubik://solver/parameters/{name}`.
    fn resolve_parameter_template(&self, uri: &str) -> Result<ResourceContents, ResourceError> {
        let spec = uri
            .strip_prefix(PARAMETER_TEMPLATE_PREFIX)
            .and_then(parameters::find)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        Ok(ResourceContents::text(
            serde_json::to_string_pretty(spec)?,
            uri,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::solver::launcher::testing::RecordingLauncher;

    fn test_service() -> ResourceService {
        let solver = Arc::new(SolverService::with_launcher(
            "http://localhost:8000/rubik.html",
            Arc::new(RecordingLauncher::default()),
        ));
        ResourceService::new(Config::default().server, solver)
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = test_service();
        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 2);
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_parameter_catalog() {
        let service = test_service();
        let result = service
            .read_resource("rubik://solver/parameters")
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(json["base_url"], "http://localhost:8000/rubik.html");
        let names: Vec<_> = json["parameters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["speed", "moves", "solve"]);
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let service = test_service();
        let result = service.read_resource("rubik://server/info").await.unwrap();

        let json: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(json["name"], "rubik-solver-mcp");
        assert_eq!(json["tools"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_read_parameter_template() {
        let service = test_service();
        let result = service
            .read_resource("rubik://solver/parameters/moves")
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(text_of(&result)).unwrap();
        assert_eq!(json["kind"], "bounded_string");
        assert_eq!(json["max_length"], 200);
    }

    #[tokio::test]
    async fn test_read_unknown_parameter_template() {
        let service = test_service();
        let result = service.read_resource("rubik://solver/parameters/zoom").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_registered_resources_render_live_state() {
        let service = test_service();
        let contents: Vec<_> = ["rubik://solver/parameters", "rubik://server/info"]
            .iter()
            .map(|uri| service.resources[*uri].content)
            .collect();
        assert_eq!(
            contents,
            vec![ResourceContent::ParameterCatalog, ResourceContent::ServerInfo]
        );
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = test_service();
        let result = service.read_resource("rubik://server/nonexistent").await;
        assert!(result.is_err());
    }
}
