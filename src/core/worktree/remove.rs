//! Removing a worktree and force-deleting its branch.

use crate::core::context::DirectoryContext;
use crate::core::repo::resolve_canonical;
use crate::core::Outcome;
use crate::error::EngineError;
use crate::git::GitCommand;
use crate::output::Output;
use std::path::Path;

/// Remove the worktree at `worktree_path` and delete `branch`.
///
/// The context is expected to sit inside the worktree directory; it is
/// ascended one level per path segment of `branch` (nested branch names
/// produce nested worktree directories) to land on the repository root.
///
/// A failed canonical-branch resolution does not block the removal: the
/// user asked for the worktree to go, and refusing over a degraded layout
/// would strand them. The degradation is returned explicitly instead of
/// being buried in a log line. A failed `worktree remove` aborts before
/// the branch deletion: force-deleting a branch whose worktree still
/// exists risks data loss, and git rejects it anyway.
pub fn remove_worktree(
    ctx: &mut DirectoryContext,
    worktree_path: &Path,
    branch: &str,
    output: &mut dyn Output,
) -> Result<Outcome, EngineError> {
    let levels = branch.split('/').count();
    ctx.pop(levels);
    let repo_path = ctx.current();

    let mut outcome = Outcome::Ok;
    let git = match resolve_canonical(&repo_path) {
        Ok(canonical) => GitCommand::new(repo_path.join(canonical.as_str())),
        Err(err) => {
            let warning = format!("canonical checkout not resolved, proceeding anyway: {err}");
            output.warning(&warning);
            outcome = Outcome::Degraded(warning);
            GitCommand::new(&repo_path)
        }
    };

    output.info(&format!("removing worktree {}", worktree_path.display()));
    git.worktree_remove(worktree_path)?;

    output.info(&format!("removing branch {branch}"));
    git.branch_delete_force(branch)?;

    output.success(&format!("worktree {branch} removed"));
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::TestOutput;

    #[test]
    fn test_remove_in_broken_layout_is_degraded_not_blocked() {
        // No main/master under the repo root: resolution fails, but the
        // removal is still attempted and fails only at the git call.
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = DirectoryContext::new(dir.path());
        ctx.push("feat");

        let mut output = TestOutput::new();
        let worktree = dir.path().join("feat");
        let result = remove_worktree(&mut ctx, &worktree, "feat", &mut output);

        assert!(output.has_warning("proceeding anyway"));
        // Not a git repo, so the worktree-remove itself fails.
        assert!(matches!(
            result,
            Err(EngineError::CommandFailed { .. }) | Err(EngineError::Io(_))
        ));
    }

    #[test]
    fn test_ascent_depth_matches_branch_segments() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = DirectoryContext::new(dir.path());
        ctx.push("feature");
        ctx.push("x");

        let mut output = TestOutput::new();
        let worktree = dir.path().join("feature/x");
        let _ = remove_worktree(&mut ctx, &worktree, "feature/x", &mut output);

        // Two segments popped: the context is back at the repository root.
        assert_eq!(ctx.current(), dir.path());
    }
}
