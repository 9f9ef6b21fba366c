//! Install lock: `<env>/.venvlite.lock`.
//!
//! Written after a successful dependency install, keyed by the manifest's
//! content hash. The lock is advisory: a matching hash lets `setup` skip
//! reinstallation; a missing, stale, or corrupt lock simply forces a fresh
//! install. It never gates `run`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOCK_FILE: &str = ".venvlite.lock";

/// Record of the last successful dependency install.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallLock {
    /// SHA-256 of the manifest contents the install corresponds to.
    pub manifest_hash: String,
    /// Requirement lines that were installed, in manifest order.
    pub packages: Vec<String>,
    /// RFC 3339 timestamp of the install.
    pub installed_at: String,
}

/// Read the lock inside `env_dir`. Any failure (absent file, bad JSON)
/// reads as `None`.
pub fn read_lock(env_dir: &Path) -> Option<InstallLock> {
    let content = std::fs::read_to_string(env_dir.join(LOCK_FILE)).ok()?;
    match serde_json::from_str(&content) {
        Ok(lock) => Some(lock),
        Err(e) => {
            tracing::debug!("Ignoring unreadable install lock: {}", e);
            None
        }
    }
}

/// Write a fresh lock inside `env_dir`.
pub fn write_lock(env_dir: &Path, manifest_hash: &str, packages: &[String]) -> Result<()> {
    let lock = InstallLock {
        manifest_hash: manifest_hash.to_string(),
        packages: packages.to_vec(),
        installed_at: chrono::Utc::now().to_rfc3339(),
    };
    let path = env_dir.join(LOCK_FILE);
    std::fs::write(&path, serde_json::to_string_pretty(&lock)? + "\n")?;
    Ok(())
}

/// True when the lock inside `env_dir` matches `manifest_hash`.
pub fn is_fresh(env_dir: &Path, manifest_hash: &str) -> bool {
    read_lock(env_dir).is_some_and(|lock| lock.manifest_hash == manifest_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lock_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let packages = vec!["streamlit>=1.28.0".to_string(), "pandas>=2.0.0".to_string()];
        write_lock(tmp.path(), "abc123", &packages).unwrap();

        let lock = read_lock(tmp.path()).expect("lock should read back");
        assert_eq!(lock.manifest_hash, "abc123");
        assert_eq!(lock.packages, packages);
        assert!(is_fresh(tmp.path(), "abc123"));
        assert!(!is_fresh(tmp.path(), "def456"));
    }

    #[test]
    fn test_missing_lock_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(read_lock(tmp.path()).is_none());
        assert!(!is_fresh(tmp.path(), "abc123"));
    }

    #[test]
    fn test_corrupt_lock_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(LOCK_FILE), "not json {").unwrap();
        assert!(read_lock(tmp.path()).is_none());
    }
}
