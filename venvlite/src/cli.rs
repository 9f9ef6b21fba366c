use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// venvlite - one-command dev environment for a Streamlit data app
#[derive(Parser, Debug)]
#[command(name = "venvlite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the isolated environment and install the dependency manifest
    ///
    /// Idempotent: an existing environment is left untouched, and an install
    /// lock matching the manifest skips the install step entirely.
    #[command(alias = "install")]
    Setup {
        /// Environment directory [env: VENVLITE_ENV_DIR] (default: venv)
        #[arg(long, value_name = "DIR")]
        env_dir: Option<PathBuf>,

        /// Base Python interpreter used to create the environment
        /// [env: VENVLITE_PYTHON] (default: probe python3, then python)
        #[arg(long, value_name = "PATH")]
        python: Option<String>,

        /// Dependency manifest [env: VENVLITE_REQUIREMENTS] (default: requirements.txt)
        #[arg(long, short = 'r', value_name = "FILE")]
        requirements: Option<PathBuf>,
    },

    /// Serve the app through the runner inside the environment (blocking)
    ///
    /// Ensures the environment exists first, but does not reinstall
    /// dependencies. Blocks until the runner exits and propagates its exit
    /// code.
    Run {
        /// Environment directory [env: VENVLITE_ENV_DIR] (default: venv)
        #[arg(long, value_name = "DIR")]
        env_dir: Option<PathBuf>,

        /// Base Python interpreter used to create the environment
        /// [env: VENVLITE_PYTHON] (default: probe python3, then python)
        #[arg(long, value_name = "PATH")]
        python: Option<String>,

        /// Entry-point file handed to the runner
        /// [env: VENVLITE_ENTRY_POINT] (default: app.py)
        #[arg(long, value_name = "FILE")]
        entry: Option<PathBuf>,

        /// Extra arguments passed through to the application runner
        #[arg(last = true, value_name = "ARGS")]
        runner_args: Vec<String>,
    },

    /// Remove the environment directory recursively
    ///
    /// Safe to run when the environment is absent; no confirmation prompt.
    Clean {
        /// Environment directory [env: VENVLITE_ENV_DIR] (default: venv)
        #[arg(long, value_name = "DIR")]
        env_dir: Option<PathBuf>,

        /// Show what would be removed without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Show environment state, resolved tool paths, and manifest summary
    Status {
        /// Environment directory [env: VENVLITE_ENV_DIR] (default: venv)
        #[arg(long, value_name = "DIR")]
        env_dir: Option<PathBuf>,

        /// Dependency manifest [env: VENVLITE_REQUIREMENTS] (default: requirements.txt)
        #[arg(long, short = 'r', value_name = "FILE")]
        requirements: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_is_an_alias_of_setup() {
        let cli = Cli::try_parse_from(["venvlite", "install"]).unwrap();
        assert!(matches!(cli.command, Commands::Setup { .. }));
    }

    #[test]
    fn test_run_trailing_args_pass_through() {
        let cli = Cli::try_parse_from([
            "venvlite",
            "run",
            "--entry",
            "app.py",
            "--",
            "--server.port",
            "8502",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                entry, runner_args, ..
            } => {
                assert_eq!(entry, Some(PathBuf::from("app.py")));
                assert_eq!(runner_args, ["--server.port", "8502"]);
            }
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn test_clean_dry_run_flag() {
        let cli = Cli::try_parse_from(["venvlite", "clean", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Clean { dry_run, env_dir } => {
                assert!(dry_run);
                assert_eq!(env_dir, None);
            }
            other => panic!("expected clean, got {:?}", other),
        }
    }
}
