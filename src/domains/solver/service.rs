//! Solver service implementation.
//!
//! The SolverService turns request parameters into solver URLs, reports on
//! the parameter catalog, validates values against it and hands finished URLs
//! to a [`BrowserLauncher`].

use schemars::JsonSchema;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::error::SolverError;
use super::launcher::{BrowserLauncher, SystemBrowser};
use super::parameters::{MOVES, PARAMETERS, ParameterKind, ParameterSpec, SOLVE, SPEED};
use crate::core::config::SolverConfig;

// ============================================================================
// Request Parameters
// ============================================================================

/// Solver parameters supplied by a tool call. Omitted fields are `None`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SolverParams {
    /// Animation speed factor: 1 (slow) to 5 (animation off).
    #[serde(default)]
    pub speed: Option<i64>,

    /// Initial move sequence, e.g. "D F R' 2U". "S" is a random move.
    #[serde(default)]
    pub moves: Option<String>,

    /// Start solving immediately after launch (0 or 1).
    #[serde(default)]
    pub solve: Option<i64>,
}

// ============================================================================
// Validation Report
// ============================================================================

/// One line of a validation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    Valid(String),
    Invalid(String),
    Note(String),
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(msg) => write!(f, "✓ {}", msg),
            Self::Invalid(msg) => write!(f, "✗ {}", msg),
            Self::Note(msg) => write!(f, "ℹ {}", msg),
        }
    }
}

/// Outcome of validating a set of solver parameters.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    checks: Vec<Check>,
}

impl ValidationReport {
    /// All report lines in order.
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// True when no checked parameter failed.
    pub fn all_valid(&self) -> bool {
        !self.checks.iter().any(|c| matches!(c, Check::Invalid(_)))
    }

    /// The closing summary line.
    pub fn summary(&self) -> &'static str {
        if self.all_valid() {
            "All parameters valid!"
        } else {
            "Some parameters invalid!"
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for check in &self.checks {
            writeln!(f, "{}", check)?;
        }
        write!(f, "\n{}", self.summary())
    }
}

// ============================================================================
// Service
// ============================================================================

/// Service for building, validating and launching solver URLs.
pub struct SolverService {
    base_url: String,
    launcher: Arc<dyn BrowserLauncher>,
}

impl SolverService {
    /// Create a new SolverService launching through the system browser.
    pub fn new(config: &SolverConfig) -> Self {
        info!("Initializing SolverService");
        Self::with_launcher(
            config.base_url.clone(),
            Arc::new(SystemBrowser::with_command(config.browser_command.clone())),
        )
    }

    /// Create a SolverService with a specific launcher.
    pub fn with_launcher(base_url: impl Into<String>, launcher: Arc<dyn BrowserLauncher>) -> Self {
        Self {
            base_url: base_url.into(),
            launcher,
        }
    }

    /// The solver application's base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a solver URL from the given parameters.
    ///
    /// Out-of-range speeds are logged and emitted anyway. When `solve` is
    /// given, the already-encoded `moves` value is encoded a second time and
    /// `solve` itself is not written to the query.
    #[instrument(skip_all)]
    pub fn build_url(&self, params: &SolverParams) -> String {
        let mut query: Vec<(&'static str, String)> = Vec::new();

        match params.speed {
            Some(speed) => {
                if !SPEED.accepts_int(speed) {
                    let (min, max) = SPEED.range().unwrap_or_default();
                    warn!(
                        "Speed {} is outside recommended range [{}, {}]. \
                         Proceeding anyway but may not work as expected.",
                        speed, min, max
                    );
                }
                upsert(&mut query, SPEED.name, speed.to_string());
            }
            None => {
                if let ParameterKind::BoundedInt {
                    default: Some(default),
                    ..
                } = SPEED.kind
                {
                    upsert(&mut query, SPEED.name, default.to_string());
                }
            }
        }

        let mut moves = params.moves.clone();

        if let Some(current) = moves.as_mut() {
            *current = form_encode(current);
            upsert(&mut query, MOVES.name, current.clone());
        }

        if params.solve.is_some() {
            if let Some(current) = moves.as_mut() {
                *current = form_encode(current);
                upsert(&mut query, MOVES.name, current.clone());
            }
        }

        let query_string = query
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        let url = format!("{}?{}", self.base_url, query_string);
        info!("Generated URL: {}", url);
        url
    }

    /// Describe every parameter of the catalog.
    pub fn describe_parameters(&self) -> String {
        let mut lines = vec![
            "=== Rubik's Cube Solver Parameter Configuration ===".to_string(),
            format!("Base URL: {}", self.base_url),
        ];

        for spec in PARAMETERS.iter() {
            lines.push(String::new());
            lines.push(format!("{}:", spec.name.to_uppercase()));
            lines.push(format!("  Description: {}", spec.description));
            lines.push(format!("  Data type: {}", spec.value_type()));
            if let Some((min, max)) = spec.range() {
                lines.push(format!("  Valid Range: {} to {}", min, max));
            }
            if let Some(max_length) = spec.max_length() {
                lines.push(format!("  Max Length: {} characters", max_length));
            }
            lines.push(format!("  Default Value: {}", spec.default_display()));
        }

        lines.push(String::new());
        lines.push("=".repeat(40));
        lines.join("\n")
    }

    /// Validate parameters against the catalog.
    ///
    /// Notes about defaults are appended afterwards: for `speed` when it is
    /// absent or `0`, but for `moves` and `solve` when they are non-empty and
    /// non-zero, i.e. when a value was actually supplied.
    #[instrument(skip_all)]
    pub fn validate(&self, params: &SolverParams) -> ValidationReport {
        let mut checks = Vec::new();

        if let Some(speed) = params.speed {
            checks.push(check_int(&SPEED, speed));
        }

        if let Some(moves) = params.moves.as_deref() {
            let max_length = MOVES.max_length().unwrap_or_default();
            checks.push(if MOVES.accepts_str(moves) {
                Check::Valid(format!(
                    "Moves {} is valid (max length: {})",
                    moves, max_length
                ))
            } else {
                Check::Invalid(format!(
                    "Moves {} is TOO LONG (max length: {}, actual: {})",
                    moves,
                    max_length,
                    moves.chars().count()
                ))
            });
        }

        if let Some(solve) = params.solve {
            checks.push(check_int(&SOLVE, solve));
        }

        if params.speed.unwrap_or_default() == 0 {
            checks.push(not_provided(&SPEED));
        }
        if params.moves.as_deref().is_some_and(|m| !m.is_empty()) {
            checks.push(not_provided(&MOVES));
        }
        if params.solve.is_some_and(|s| s != 0) {
            checks.push(not_provided(&SOLVE));
        }

        let report = ValidationReport { checks };
        info!("Validation finished: {}", report.summary());
        report
    }

    /// Open a solver URL in the browser.
    ///
    /// URLs outside the configured base URL are rejected without touching
    /// the launcher.
    #[instrument(skip(self))]
    pub fn open_in_browser(&self, url: &str) -> Result<String, SolverError> {
        if !url.starts_with(&self.base_url) {
            warn!("Refusing to open URL outside {}", self.base_url);
            return Err(SolverError::invalid_url(&self.base_url, url));
        }

        match self.launcher.open(url) {
            Ok(()) => {
                info!("Opened browser with URL: {}", url);
                Ok(format!("Browser opened with URL:\n{}", url))
            }
            Err(e) => {
                error!("Failed to open browser: {}", e);
                Err(SolverError::launch(url, e))
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Form-encode a single query value.
///
/// Only ASCII alphanumerics and `-_.~` pass through and a space becomes `+`,
/// the same output as Python's `quote_plus`.
fn form_encode(value: &str) -> String {
    // urlencoding never emits "%20" for anything but a space
    urlencoding::encode(value).replace("%20", "+")
}

/// Set `key` to `value`, keeping the position of an existing entry.
fn upsert(query: &mut Vec<(&'static str, String)>, key: &'static str, value: String) {
    match query.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => query.push((key, value)),
    }
}

/// Display label of a parameter ("speed" -> "Speed").
fn label(spec: &ParameterSpec) -> String {
    let mut chars = spec.name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn check_int(spec: &ParameterSpec, value: i64) -> Check {
    let (min, max) = spec.range().unwrap_or_default();
    let name = label(spec);

    let is_flag = spec.name == SOLVE.name;

    match (spec.accepts_int(value), is_flag) {
        (true, true) => Check::Valid(format!("{} {} is valid", name, value)),
        (true, false) => Check::Valid(format!(
            "{} {} is valid (range: {}-{})",
            name, value, min, max
        )),
        (false, true) => Check::Invalid(format!(
            "{} {} is NOT VALID (only {} and {} are valid)",
            name, value, min, max
        )),
        (false, false) => Check::Invalid(format!(
            "{} {} is OUT OF RANGE (valid: {}-{})",
            name, value, min, max
        )),
    }
}

fn not_provided(spec: &ParameterSpec) -> Check {
    Check::Note(format!("{} not provided, will use default", label(spec)))
}

// ============================================================================
// Tests
// ============================================================================
