//! Read-only resources describing the solver.
//!
//! `rubik://solver/parameters` is the parameter catalog as JSON and
//! `rubik://server/info` summarizes this server. A single parameter can be
//! read through the `rubik://solver/parameters/{name}` template.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resource_templates, get_all_resources, resource_uris};
pub use service::{ResourceContent, ResourceEntry, ResourceService};
