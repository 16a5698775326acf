use super::GitCommand;
use crate::error::EngineError;
use std::path::Path;

impl GitCommand {
    /// `git worktree add -b <new_branch> <path> <base_branch>`.
    ///
    /// Creates `new_branch` rooted at `base_branch` and materializes it at
    /// `path`. Fails if the branch already exists.
    pub fn worktree_add_new_branch(
        &self,
        new_branch: &str,
        path: &Path,
        base_branch: &str,
    ) -> Result<(), EngineError> {
        let path = path.to_string_lossy().into_owned();
        self.run(&["worktree", "add", "-b", new_branch, &path, base_branch])?;
        Ok(())
    }

    /// `git worktree remove <path>`.
    pub fn worktree_remove(&self, path: &Path) -> Result<(), EngineError> {
        let path = path.to_string_lossy().into_owned();
        self.run(&["worktree", "remove", &path])?;
        Ok(())
    }

    /// `git worktree list --porcelain`, returning the raw porcelain text.
    pub fn worktree_list_porcelain(&self) -> Result<String, EngineError> {
        let output = self.run(&["worktree", "list", "--porcelain"])?;
        Ok(output.stdout)
    }
}
