//! Prompts that walk a model through the solver tools.
//!
//! A prompt is a `PromptDefinition` under `definitions/`, listed in
//! `registry::get_all_prompts`, and rendered by `PromptService` with the
//! small placeholder language in `templates`.

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::{PromptService, string_arguments};
pub use templates::PromptTemplate;
