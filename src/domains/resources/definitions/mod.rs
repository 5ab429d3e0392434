//! Static resource metadata, one file per resource.

mod parameters;
mod server_info;

pub use parameters::{PARAMETER_TEMPLATE_PREFIX, ParameterCatalogResource};
pub use server_info::ServerInfoResource;

use super::service::ResourceContent;

/// Metadata of a registered resource and where its content comes from.
pub trait ResourceDefinition {
    const URI: &'static str;

    const NAME: &'static str;

    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// What the resource renders on every read.
    fn content() -> ResourceContent;
}
