//! `venvlite status` — report environment state without touching anything.
//!
//! States mirror the environment lifecycle: `absent` (no interpreter),
//! `created` (interpreter, no install lock), `ready` (install lock present).

use anyhow::Result;
use venvlite_core::config::EnvConfig;
use venvlite_core::{lock, manifest::Manifest};
use venvlite_env::paths;

pub fn cmd_status(config: &EnvConfig, json: bool) -> Result<()> {
    let tools = paths::resolve(&config.env_dir);
    let manifest = Manifest::load_optional(&config.manifest)?;
    let install_lock = tools
        .as_ref()
        .and_then(|_| lock::read_lock(&config.env_dir));

    let state = match (&tools, &install_lock) {
        (None, _) => "absent",
        (Some(_), None) => "created",
        (Some(_), Some(_)) => "ready",
    };
    let manifest_changed = match (&manifest, &install_lock) {
        (Some(m), Some(l)) => l.manifest_hash != m.content_hash(),
        _ => false,
    };

    if json {
        let value = serde_json::json!({
            "state": state,
            "env_dir": config.env_dir.display().to_string(),
            "python": tools.as_ref().map(|t| t.python.display().to_string()),
            "runner": tools.as_ref().map(|t| t.runner.display().to_string()),
            "manifest": {
                "path": config.manifest.display().to_string(),
                "present": manifest.is_some(),
                "packages": manifest.as_ref().map(|m| m.len()).unwrap_or(0),
                "changed_since_install": manifest_changed,
            },
            "installed_at": install_lock.as_ref().map(|l| l.installed_at.clone()),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Environment: {} ({})", config.env_dir.display(), state);
    if let Some(t) = &tools {
        println!("  python:  {}", t.python.display());
        println!("  runner:  {}", t.runner.display());
    }
    match &manifest {
        Some(m) => println!(
            "Manifest:    {} ({} requirement(s))",
            m.path.display(),
            m.len()
        ),
        None => println!("Manifest:    {} (missing)", config.manifest.display()),
    }
    if let Some(l) = &install_lock {
        println!("Installed:   {}", l.installed_at);
        if manifest_changed {
            println!("⚠ Manifest changed since last install — run `venvlite setup`");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn config_for(dir: &Path) -> EnvConfig {
        EnvConfig {
            env_dir: dir.join("venv"),
            python: None,
            manifest: dir.join("requirements.txt"),
            entry_point: PathBuf::from("app.py"),
        }
    }

    fn seed_fake_env(env_dir: &Path) {
        let bin = env_dir.join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("python"), "").unwrap();
    }

    #[test]
    fn test_status_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_for(tmp.path());
        cmd_status(&config, false).unwrap();
        cmd_status(&config, true).unwrap();
    }

    #[test]
    fn test_status_created_and_ready() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_for(tmp.path());
        seed_fake_env(&config.env_dir);
        fs::write(&config.manifest, "streamlit>=1.28.0\n").unwrap();

        // created: interpreter but no lock
        cmd_status(&config, false).unwrap();

        // ready: lock written after an install
        let manifest = Manifest::load(&config.manifest).unwrap();
        lock::write_lock(&config.env_dir, manifest.content_hash(), manifest.packages()).unwrap();
        cmd_status(&config, true).unwrap();
    }
}
