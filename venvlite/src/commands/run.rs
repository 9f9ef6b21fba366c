//! `venvlite run` — ensure the environment exists, then serve the app.
//!
//! Does not reinstall dependencies: the environment's existence is the only
//! precondition. Blocks for the runner's entire lifetime.

use anyhow::Result;
use venvlite_core::config::EnvConfig;
use venvlite_env::{builder, runner};

pub fn cmd_run(config: &EnvConfig, runner_args: &[String]) -> Result<i32> {
    builder::ensure_environment(config)?;

    eprintln!(
        "▶ Serving {} from {} — Ctrl-C to stop",
        config.entry_point.display(),
        config.env_dir.display()
    );
    let code = runner::run_app(&config.env_dir, &config.entry_point, runner_args)?;
    if code != 0 {
        eprintln!("✗ Application runner exited with status {}", code);
    }
    Ok(code)
}
