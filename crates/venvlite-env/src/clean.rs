//! Remove the environment directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Recursively remove the environment directory.
///
/// Returns `true` when something was removed, `false` when the directory
/// was already absent. The absent case is never an error (idempotent,
/// no confirmation).
pub fn remove_environment(env_dir: &Path) -> Result<bool> {
    match fs::remove_dir_all(env_dir) {
        Ok(()) => {
            tracing::info!(env_dir = %env_dir.display(), "Removed environment");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => {
            Err(e).with_context(|| format!("Remove environment {}", env_dir.display()))
        }
    }
}

/// Compute total size of a directory recursively.
pub fn dir_size(path: &Path) -> u64 {
    let mut total: u64 = 0;
    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            let p = entry.path();
            if p.is_dir() {
                total += dir_size(&p);
            } else if let Ok(meta) = p.metadata() {
                total += meta.len();
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_on_absent_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let env_dir = tmp.path().join("venv");

        assert!(!remove_environment(&env_dir).unwrap());
        // Twice in a row equals once.
        assert!(!remove_environment(&env_dir).unwrap());
    }

    #[test]
    fn test_clean_removes_recursively() {
        let tmp = tempfile::tempdir().unwrap();
        let env_dir = tmp.path().join("venv");
        fs::create_dir_all(env_dir.join("bin")).unwrap();
        fs::write(env_dir.join("bin").join("python"), "").unwrap();
        fs::write(env_dir.join(".venvlite.lock"), "{}").unwrap();

        assert!(remove_environment(&env_dir).unwrap());
        assert!(!env_dir.exists());
        assert!(!remove_environment(&env_dir).unwrap());
    }

    #[test]
    fn test_dir_size_counts_files() {
        let tmp = tempfile::tempdir().unwrap();
        let env_dir = tmp.path().join("venv");
        fs::create_dir_all(env_dir.join("bin")).unwrap();
        fs::write(env_dir.join("bin").join("python"), b"12345").unwrap();
        fs::write(env_dir.join("pyvenv.cfg"), b"123").unwrap();

        assert_eq!(dir_size(&env_dir), 8);
    }
}
