//! `venvlite clean` — remove the environment directory recursively.

use anyhow::Result;
use std::path::Path;
use venvlite_env::clean::{dir_size, remove_environment};

pub fn cmd_clean(env_dir: &Path, dry_run: bool) -> Result<()> {
    if !env_dir.exists() {
        eprintln!("No environment at {}", env_dir.display());
        return Ok(());
    }

    let size = dir_size(env_dir);

    if dry_run {
        eprintln!(
            "Would remove {} ({})",
            env_dir.display(),
            format_size(size)
        );
        eprintln!("(Dry run — nothing removed. Remove --dry-run to delete.)");
        return Ok(());
    }

    if remove_environment(env_dir)? {
        eprintln!(
            "✓ Removed {}, freed {}",
            env_dir.display(),
            format_size(size)
        );
    } else {
        eprintln!("No environment at {}", env_dir.display());
    }

    Ok(())
}

/// Format byte size to human-readable string.
fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_cmd_clean_absent_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let env_dir = tmp.path().join("venv");
        assert!(cmd_clean(&env_dir, false).is_ok());
        assert!(cmd_clean(&env_dir, true).is_ok());
    }

    #[test]
    fn test_cmd_clean_dry_run_keeps_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let env_dir = tmp.path().join("venv");
        fs::create_dir_all(env_dir.join("bin")).unwrap();
        fs::write(env_dir.join("bin").join("python"), "").unwrap();

        cmd_clean(&env_dir, true).unwrap();
        assert!(env_dir.exists());

        cmd_clean(&env_dir, false).unwrap();
        assert!(!env_dir.exists());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
