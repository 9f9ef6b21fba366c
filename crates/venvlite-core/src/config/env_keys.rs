//! Environment variable key constants.
//!
//! Use these when reading env vars to avoid typos and enable refactoring.
//! CLI flags take precedence over every variable listed here.

/// Environment layout and tool selection.
pub mod env {
    /// Environment directory (default: `venv`).
    pub const VENVLITE_ENV_DIR: &str = "VENVLITE_ENV_DIR";
    /// Base interpreter used to create the environment (default: probe PATH).
    pub const VENVLITE_PYTHON: &str = "VENVLITE_PYTHON";
    /// Dependency manifest path (default: `requirements.txt`).
    pub const VENVLITE_REQUIREMENTS: &str = "VENVLITE_REQUIREMENTS";
    /// Application entry-point file (default: `app.py`).
    pub const VENVLITE_ENTRY_POINT: &str = "VENVLITE_ENTRY_POINT";
}

/// Logging.
pub mod observability {
    /// When set truthy, only WARN and above are logged.
    pub const VENVLITE_QUIET: &str = "VENVLITE_QUIET";
    /// Tracing filter directive (default: `venvlite=info`).
    pub const VENVLITE_LOG_LEVEL: &str = "VENVLITE_LOG_LEVEL";
    /// When set truthy, log records are emitted as JSON.
    pub const VENVLITE_LOG_JSON: &str = "VENVLITE_LOG_JSON";
}
