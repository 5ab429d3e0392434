//! Server info resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "rubik://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Name, version, solver base URL and available tools of this MCP server";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::ServerInfo
    }
}
