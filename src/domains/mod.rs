//! Domains module containing business logic organized by bounded contexts.
//!
//! - **solver**: parameter catalog, URL building and browser launching
//! - **tools**: MCP tools wrapping the solver service
//! - **resources**: read-only data about the solver and the server
//! - **prompts**: prompt templates driving the tools

pub mod prompts;
pub mod resources;
pub mod solver;
pub mod tools;
