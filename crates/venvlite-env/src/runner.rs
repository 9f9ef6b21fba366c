//! Launch the application through the runner inside the environment.

use anyhow::{Context, Result};
use std::path::Path;

use crate::paths;
use crate::EnvError;

/// Run the application entry point as a blocking foreground child and
/// return its exit code.
///
/// The runner owns the terminal for its entire lifetime (interactive server
/// loop); Ctrl-C reaches it through the shared process group and we merely
/// observe the resulting exit status. No timeout, no restart, no cleanup.
/// A missing entry-point file is the runner's error to report, not ours.
pub fn run_app(env_dir: &Path, entry_point: &Path, extra_args: &[String]) -> Result<i32> {
    let tools = paths::resolve(env_dir).ok_or_else(|| EnvError::Missing(env_dir.to_path_buf()))?;

    let mut cmd = tools.runner_command();
    cmd.arg("run").arg(entry_point).args(extra_args);

    tracing::info!(
        runner = %tools.runner.display(),
        entry = %entry_point.display(),
        "Launching application"
    );
    let status = cmd
        .status()
        .with_context(|| format!("Launch application runner {}", tools.runner.display()))?;

    let code = status.code().unwrap_or(-1);
    tracing::info!(code, "Application runner exited");
    Ok(code)
}
