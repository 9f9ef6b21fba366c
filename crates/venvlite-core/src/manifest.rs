//! Dependency manifest (`requirements.txt`) loading.
//!
//! The manifest is externally owned and read-only from our side: we only
//! parse it far enough to report the package set and to fingerprint its
//! contents for the install lock. Requirement syntax itself is pip's
//! business, not ours.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A loaded dependency manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Path the manifest was read from.
    pub path: PathBuf,
    /// Non-empty, non-comment requirement lines, in file order.
    packages: Vec<String>,
    /// SHA-256 of the raw file contents.
    content_hash: String,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Read manifest {}", path.display()))?;
        Ok(Self::from_content(path, &content))
    }

    /// Like [`Manifest::load`], but a missing file is `None` rather than an
    /// error. Other I/O failures still surface.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(Self::from_content(path, &content))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Read manifest {}", path.display())),
        }
    }

    fn from_content(path: &Path, content: &str) -> Self {
        let packages = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(String::from)
            .collect();
        Self {
            path: path.to_path_buf(),
            packages,
            content_hash: content_hash(content),
        }
    }

    /// Requirement lines, in file order.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Fingerprint of the raw file contents, used by the install lock.
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }
}

fn content_hash(content: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut h = Sha256::new();
    h.update(content.as_bytes());
    hex::encode(h.finalize())
}
