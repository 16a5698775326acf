use super::GitCommand;
use crate::error::EngineError;

impl GitCommand {
    /// `git branch -D <branch>`.
    ///
    /// Force-deletes the branch. Callers must remove the branch's worktree
    /// first; git rejects deleting a branch that is still checked out.
    pub fn branch_delete_force(&self, branch: &str) -> Result<(), EngineError> {
        self.run(&["branch", "-D", branch])?;
        Ok(())
    }
}
