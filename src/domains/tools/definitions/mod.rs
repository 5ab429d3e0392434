//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod solver;

pub use solver::{
    GenerateSolverUrlTool, OpenBrowserParams, OpenBrowserTool, ParameterInfoParams,
    ParameterInfoTool, ValidateParametersTool,
};
