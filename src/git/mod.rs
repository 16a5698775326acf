//! Thin wrappers around the `git` binary.
//!
//! Every invocation runs through [`crate::exec::run`] so it inherits the
//! execution deadline, and every invocation carries an explicit working
//! directory instead of relying on the process-wide one.

mod branch;
mod worktree;

use crate::error::EngineError;
use crate::exec::{self, CommandOutput};
use std::path::{Path, PathBuf};

/// Handle for running git commands inside one working directory.
pub struct GitCommand {
    workdir: PathBuf,
}

impl GitCommand {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// The directory this handle runs commands in.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Liveness probe: `git status` in the working directory.
    ///
    /// Run before listing worktrees so a corrupt or locked repository is
    /// reported as a command failure instead of a confusing parse result.
    pub fn status_probe(&self) -> Result<(), EngineError> {
        self.run(&["status"]).map(|_| ())
    }

    pub(crate) fn run(&self, args: &[&str]) -> Result<CommandOutput, EngineError> {
        exec::run("git", args, &self.workdir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_command_workdir() {
        let git = GitCommand::new("/repos/proj/main");
        assert_eq!(git.workdir(), Path::new("/repos/proj/main"));
    }

    #[test]
    fn test_status_probe_outside_repo_fails() {
        let dir = tempfile::tempdir().unwrap();
        let git = GitCommand::new(dir.path());
        let err = git.status_probe().unwrap_err();
        assert!(matches!(err, EngineError::CommandFailed { .. }));
    }
}
