//! Parameter catalog resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// URI prefix of the single-parameter template (`rubik://solver/parameters/{name}`).
pub const PARAMETER_TEMPLATE_PREFIX: &str = "rubik://solver/parameters/";

/// The full parameter catalog as JSON.
pub struct ParameterCatalogResource;

impl ResourceDefinition for ParameterCatalogResource {
    const URI: &'static str = "rubik://solver/parameters";
    const NAME: &'static str = "Solver Parameters";
    const DESCRIPTION: &'static str =
        "Every URL parameter of the solver application with its type, bounds and default";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::ParameterCatalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_catalog_metadata() {
        assert_eq!(ParameterCatalogResource::URI, "rubik://solver/parameters");
        assert!(PARAMETER_TEMPLATE_PREFIX.starts_with(ParameterCatalogResource::URI));
        assert_eq!(ParameterCatalogResource::MIME_TYPE, "application/json");
    }
}
