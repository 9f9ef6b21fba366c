//! Resolve tool paths inside an environment directory.
//!
//! Nothing here is stored: paths are a pure function of the directory's
//! location. Presence of the interpreter is what "environment exists" means
//! throughout the crate.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Resolved tool paths for one environment directory.
///
/// `pip` and `runner` fall back to the interpreter itself when the
/// dedicated executable is absent; [`ToolPaths::pip_command`] and
/// [`ToolPaths::runner_command`] then go through `python -m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    /// Interpreter inside the environment.
    pub python: PathBuf,
    /// Packaging tool, or the interpreter when no `pip` executable exists.
    pub pip: PathBuf,
    /// Application runner, or the interpreter when no `streamlit` executable exists.
    pub runner: PathBuf,
}

/// Find the environment's interpreter, probing the Unix (`bin/`) and
/// Windows (`Scripts/`) layouts.
pub fn find_interpreter(env_dir: &Path) -> Option<PathBuf> {
    let unix = env_dir.join("bin").join("python");
    if unix.exists() {
        return Some(unix);
    }
    let windows = env_dir.join("Scripts").join("python.exe");
    if windows.exists() {
        return Some(windows);
    }
    None
}

/// True when the environment directory holds an interpreter.
pub fn environment_exists(env_dir: &Path) -> bool {
    find_interpreter(env_dir).is_some()
}

/// Resolve all tool paths, or `None` when the environment does not exist.
pub fn resolve(env_dir: &Path) -> Option<ToolPaths> {
    let python = find_interpreter(env_dir)?;
    let bin_dir = python.parent()?.to_path_buf();
    Some(ToolPaths {
        pip: tool_in(&bin_dir, "pip").unwrap_or_else(|| python.clone()),
        runner: tool_in(&bin_dir, "streamlit").unwrap_or_else(|| python.clone()),
        python,
    })
}

fn tool_in(bin_dir: &Path, name: &str) -> Option<PathBuf> {
    let plain = bin_dir.join(name);
    if plain.exists() {
        return Some(plain);
    }
    let exe = bin_dir.join(format!("{}.exe", name));
    if exe.exists() {
        return Some(exe);
    }
    None
}

impl ToolPaths {
    /// `pip …` via the dedicated executable, or `python -m pip …`.
    pub fn pip_command(&self) -> Command {
        self.tool_command(&self.pip, "pip")
    }

    /// `streamlit …` via the dedicated executable, or `python -m streamlit …`.
    pub fn runner_command(&self) -> Command {
        self.tool_command(&self.runner, "streamlit")
    }

    fn tool_command(&self, tool: &Path, module: &str) -> Command {
        if tool == &self.python {
            let mut c = Command::new(&self.python);
            c.arg("-m").arg(module);
            c
        } else {
            Command::new(tool)
        }
    }
}
