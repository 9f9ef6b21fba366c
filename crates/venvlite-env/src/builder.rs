//! Build the isolated environment and install the dependency manifest.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use venvlite_core::config::EnvConfig;
use venvlite_core::lock;
use venvlite_core::manifest::Manifest;

use crate::paths::{self, ToolPaths};
use crate::EnvError;

/// What `install_dependencies` actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The manifest was installed and the lock rewritten.
    Installed,
    /// The install lock matched the manifest; nothing ran.
    UpToDate,
}

/// Locate a base interpreter on PATH, preferring `python3`.
pub fn which_python() -> Result<PathBuf, EnvError> {
    for name in ["python3", "python"] {
        let probe = Command::new(name).arg("--version").output();
        if probe.is_ok_and(|out| out.status.success()) {
            return Ok(PathBuf::from(name));
        }
    }
    Err(EnvError::InterpreterNotFound {
        tried: "python3, python".to_string(),
    })
}

/// Ensure the environment exists and return its resolved tool paths.
///
/// Re-running against an existing environment is a no-op: the presence of
/// the interpreter is the only check, the directory is never validated
/// further. Creation failure leaves whatever partial state the failing tool
/// left behind; nothing is rolled back.
pub fn ensure_environment(config: &EnvConfig) -> Result<ToolPaths> {
    if let Some(existing) = paths::resolve(&config.env_dir) {
        tracing::debug!(env_dir = %config.env_dir.display(), "Environment already present");
        return Ok(existing);
    }

    let base = match &config.python {
        Some(py) => PathBuf::from(py),
        None => which_python()?,
    };

    std::fs::create_dir_all(&config.env_dir)
        .with_context(|| format!("Create environment dir {}", config.env_dir.display()))?;

    tracing::info!(
        python = %base.display(),
        env_dir = %config.env_dir.display(),
        "Creating environment"
    );
    let out = Command::new(&base)
        .arg("-m")
        .arg("venv")
        .arg(&config.env_dir)
        .output()
        .with_context(|| format!("Invoke {} -m venv", base.display()))?;
    if !out.status.success() {
        return Err(EnvError::CommandFailed {
            tool: "venv".to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        }
        .into());
    }

    paths::resolve(&config.env_dir).ok_or_else(|| {
        anyhow::anyhow!(
            "venv reported success but no interpreter found at {}",
            config.env_dir.display()
        )
    })
}

/// Upgrade the packaging tool, then install the manifest into the
/// environment. Requires the environment to exist.
///
/// Upgrade runs first: an outdated pip may reject modern manifest syntax.
/// Both steps run with inherited stdio; any non-zero exit aborts with no
/// rollback. A lock matching the manifest short-circuits the whole
/// operation.
pub fn install_dependencies(env_dir: &Path, manifest: &Manifest) -> Result<InstallOutcome> {
    let tools = paths::resolve(env_dir).ok_or_else(|| EnvError::Missing(env_dir.to_path_buf()))?;

    if lock::is_fresh(env_dir, manifest.content_hash()) {
        tracing::info!(env_dir = %env_dir.display(), "Install lock matches manifest, skipping install");
        return Ok(InstallOutcome::UpToDate);
    }

    // Always through the interpreter: pip cannot replace its own executable
    // on Windows.
    let mut upgrade = Command::new(&tools.python);
    upgrade.args(["-m", "pip", "install", "--upgrade", "pip"]);
    run_step(upgrade, "pip upgrade")?;

    if manifest.is_empty() {
        tracing::info!(manifest = %manifest.path.display(), "Manifest lists no packages");
    } else {
        let mut install = tools.pip_command();
        install.arg("install").arg("-r").arg(&manifest.path);
        run_step(install, "pip install")?;
    }

    lock::write_lock(env_dir, manifest.content_hash(), manifest.packages())?;
    Ok(InstallOutcome::Installed)
}

/// Run one pipeline step with inherited stdio, so the failing tool's own
/// diagnostics reach the operator verbatim.
fn run_step(mut cmd: Command, step: &str) -> Result<()> {
    tracing::debug!(step, "Running step");
    let status = cmd
        .status()
        .with_context(|| format!("Invoke {}", step))?;
    if !status.success() {
        return Err(EnvError::StepFailed {
            step: step.to_string(),
            code: status.code().unwrap_or(-1),
        }
        .into());
    }
    Ok(())
}
