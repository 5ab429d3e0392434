//! The resources and resource templates this server offers.

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{
    PARAMETER_TEMPLATE_PREFIX, ParameterCatalogResource, ResourceDefinition, ServerInfoResource,
};
use super::service::ResourceEntry;

fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Every concrete resource with its content source.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<ParameterCatalogResource>(),
        build_resource::<ServerInfoResource>(),
    ]
}

/// Parameterized resources (RFC 6570 URI templates).
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: format!("{}{{name}}", PARAMETER_TEMPLATE_PREFIX),
            name: "Solver Parameter".to_string(),
            title: Some("Single Solver Parameter".to_string()),
            description: Some(
                "One solver parameter (speed, moves or solve) with its bounds and default"
                    .to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
    ]
}

pub fn resource_uris() -> Vec<&'static str> {
    vec![ParameterCatalogResource::URI, ServerInfoResource::URI]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 2);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert!(uris.contains(&"rubik://solver/parameters"));
        assert!(uris.contains(&"rubik://server/info"));
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(
            templates[0].raw.uri_template,
            "rubik://solver/parameters/{name}"
        );
    }

    #[test]
    fn test_resource_uris() {
        let uris = resource_uris();
        assert_eq!(uris.len(), get_all_resources().len());
        assert!(uris.contains(&"rubik://server/info"));
    }
}
