//! Configuration structs grouped by domain, loaded from environment variables.

use super::env_keys::{env as env_keys, observability as obv_keys};
use super::loader::{env_bool, env_optional, env_or};
use std::path::PathBuf;

/// Environment layout and tool selection.
///
/// Resolution order for every field: CLI flag > `VENVLITE_*` variable > default.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Directory holding the isolated environment.
    pub env_dir: PathBuf,
    /// Base interpreter used to create the environment. `None` means probe
    /// `python3` / `python` on PATH at creation time.
    pub python: Option<String>,
    /// Dependency manifest path.
    pub manifest: PathBuf,
    /// Application entry-point file.
    pub entry_point: PathBuf,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl EnvConfig {
    /// Load from environment variables (reads `.env` first), using the
    /// documented defaults for anything unset.
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        Self {
            env_dir: PathBuf::from(env_or(env_keys::VENVLITE_ENV_DIR, || "venv".to_string())),
            python: env_optional(env_keys::VENVLITE_PYTHON),
            manifest: PathBuf::from(env_or(env_keys::VENVLITE_REQUIREMENTS, || {
                "requirements.txt".to_string()
            })),
            entry_point: PathBuf::from(env_or(env_keys::VENVLITE_ENTRY_POINT, || {
                "app.py".to_string()
            })),
        }
    }

    /// Apply CLI flag overrides on top of the env-derived values.
    pub fn with_cli_overrides(
        mut self,
        env_dir: Option<PathBuf>,
        python: Option<String>,
        manifest: Option<PathBuf>,
        entry_point: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = env_dir {
            self.env_dir = dir;
        }
        if let Some(py) = python {
            self.python = Some(py);
        }
        if let Some(m) = manifest {
            self.manifest = m;
        }
        if let Some(entry) = entry_point {
            self.entry_point = entry;
        }
        self
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Only WARN and above when set.
    pub quiet: bool,
    /// Tracing filter directive.
    pub log_level: String,
    /// Emit log records as JSON.
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self {
            quiet: env_bool(obv_keys::VENVLITE_QUIET, false),
            log_level: env_or(obv_keys::VENVLITE_LOG_LEVEL, || {
                "venvlite=info".to_string()
            }),
            log_json: env_bool(obv_keys::VENVLITE_LOG_JSON, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_config_cli_overrides_win() {
        let cfg = EnvConfig {
            env_dir: PathBuf::from("venv"),
            python: None,
            manifest: PathBuf::from("requirements.txt"),
            entry_point: PathBuf::from("app.py"),
        };
        let cfg = cfg.with_cli_overrides(
            Some(PathBuf::from(".venv-test")),
            Some("python3.12".to_string()),
            None,
            None,
        );
        assert_eq!(cfg.env_dir, PathBuf::from(".venv-test"));
        assert_eq!(cfg.python.as_deref(), Some("python3.12"));
        // Untouched fields keep their prior values
        assert_eq!(cfg.manifest, PathBuf::from("requirements.txt"));
        assert_eq!(cfg.entry_point, PathBuf::from("app.py"));
    }
}
