//! `venvlite setup` (alias `install`) — ensure the environment exists, then
//! install the dependency manifest into it.

use anyhow::Result;
use venvlite_core::config::EnvConfig;
use venvlite_core::manifest::Manifest;
use venvlite_env::builder::{self, InstallOutcome};
use venvlite_env::paths;

pub fn cmd_setup(config: &EnvConfig) -> Result<()> {
    let existed = paths::environment_exists(&config.env_dir);
    builder::ensure_environment(config)?;
    if existed {
        eprintln!("✓ Environment present at {}", config.env_dir.display());
    } else {
        eprintln!("✓ Created environment at {}", config.env_dir.display());
    }

    match Manifest::load_optional(&config.manifest)? {
        Some(manifest) => {
            match builder::install_dependencies(&config.env_dir, &manifest)? {
                InstallOutcome::Installed => eprintln!(
                    "✓ Installed {} requirement(s) from {}",
                    manifest.len(),
                    manifest.path.display()
                ),
                InstallOutcome::UpToDate => eprintln!(
                    "✓ Dependencies up to date ({} unchanged)",
                    manifest.path.display()
                ),
            }
        }
        None => {
            eprintln!(
                "⚠ No manifest at {} — skipping dependency install",
                config.manifest.display()
            );
        }
    }

    Ok(())
}
