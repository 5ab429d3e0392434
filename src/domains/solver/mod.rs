//! Solver domain module.
//!
//! This module owns everything the server knows about the browser-based
//! cube solver: the parameter catalog, URL construction and validation, and
//! launching URLs in a browser.
//!
//! ## Architecture
//!
//! - `parameters.rs` - Static parameter catalog (`speed`, `moves`, `solve`)
//! - `service.rs` - SolverService: build, describe, validate, open
//! - `launcher.rs` - BrowserLauncher trait and the system implementation
//! - `error.rs` - Solver-specific error types

mod error;
pub mod launcher;
pub mod parameters;
mod service;

pub use error::SolverError;
pub use launcher::{BrowserLauncher, SystemBrowser};
pub use parameters::{PARAMETERS, ParameterKind, ParameterSpec, ValueType};
pub use service::{Check, SolverParams, SolverService, ValidationReport};
