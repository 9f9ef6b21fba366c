//! Environment lifecycle for a local Python data app: create an isolated
//! venv, install the pinned dependency set, launch the app through the
//! runner inside the environment, remove the environment on demand.
//!
//! Every operation is a synchronous blocking subprocess invocation; a
//! failing step aborts the pipeline immediately and no partial state is
//! rolled back.

use std::path::PathBuf;
use thiserror::Error;

pub mod builder;
pub mod clean;
pub mod paths;
pub mod runner;

/// Errors from environment lifecycle operations.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("No usable Python interpreter found (tried: {tried}) — install Python 3 or pass --python")]
    InterpreterNotFound { tried: String },

    #[error("Environment at {} does not exist — run `venvlite setup` first", .0.display())]
    Missing(PathBuf),

    #[error("{tool} failed: {stderr}")]
    CommandFailed { tool: String, stderr: String },

    #[error("{step} exited with status {code}")]
    StepFailed { step: String, code: i32 },
}
