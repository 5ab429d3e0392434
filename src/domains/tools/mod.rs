//! MCP tools over the solver service.
//!
//! Each tool lives in its own file under `definitions/solver/` and carries
//! its name, description, input schema and `execute` function. `router`
//! wires them into rmcp for the STDIO and TCP transports; `registry` does
//! the same by name for the HTTP transport. A new tool has to be added to
//! both.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
