//! Engine error taxonomy.
//!
//! Every fallible engine operation returns one of these variants so callers
//! can distinguish layout problems from external-process failures without
//! string matching. The CLI layer wraps them in `anyhow` for display.

use std::path::PathBuf;

/// Errors produced by the worktree orchestration engine.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The repository directory has neither a `main` nor a `master` checkout.
    #[error("no main or master checkout found in {0}")]
    LayoutViolation(PathBuf),

    /// An external command exited with a non-zero status.
    #[error("command failed: {stderr}")]
    CommandFailed { stderr: String },

    /// An external command exceeded the execution deadline and was killed.
    #[error("command timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A branch name failed validation.
    #[error("invalid branch name: {0}")]
    Validation(String),
}

impl EngineError {
    /// The captured stderr of a failed command, if this is a command failure.
    pub fn command_stderr(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { stderr } => Some(stderr),
            _ => None,
        }
    }
}
