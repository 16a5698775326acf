//! Adding a worktree: branch creation plus workspace config propagation.

use crate::core::repo::{resolve_canonical, RepoRoot};
use crate::core::Outcome;
use crate::error::EngineError;
use crate::git::GitCommand;
use crate::output::Output;
use crate::utils::{copy_file, validate_branch_name};
use crate::WORKSPACE_FILE;
use std::path::Path;

/// Create a new worktree for `new_branch` in `repo`.
///
/// The branch is rooted at the canonical checkout and materialized at a
/// sibling directory `../<new_branch>` relative to it. If the canonical
/// checkout carries a workspace config file, it is copied into the new
/// worktree; a failed copy degrades the outcome but does not roll back
/// the worktree, since undoing a worktree-add is riskier than leaving a
/// worktree without editor config.
pub fn add_worktree(
    repo: &RepoRoot,
    new_branch: &str,
    output: &mut dyn Output,
) -> Result<Outcome, EngineError> {
    validate_branch_name(new_branch)?;

    // Re-resolve rather than trusting the scan result; the layout may
    // have changed out-of-band since then.
    let canonical = resolve_canonical(&repo.path)?;
    let canonical_path = repo.path.join(canonical.as_str());
    let git = GitCommand::new(&canonical_path);

    output.info(&format!("adding worktree {new_branch}"));
    let destination = Path::new("..").join(new_branch);
    git.worktree_add_new_branch(new_branch, &destination, canonical.as_str())?;

    let outcome = propagate_workspace_config(&canonical_path, &repo.path.join(new_branch), output);

    output.success(&format!("worktree {new_branch} added"));
    Ok(outcome)
}

/// Copy the workspace config file into a freshly created worktree.
///
/// A missing source file is normal (it is optional tooling metadata); a
/// failed copy is reported as a degraded outcome.
fn propagate_workspace_config(
    canonical_path: &Path,
    worktree_path: &Path,
    output: &mut dyn Output,
) -> Outcome {
    let src = canonical_path.join(WORKSPACE_FILE);
    if !src.is_file() {
        output.step("no workspace config to propagate");
        return Outcome::Ok;
    }

    match copy_file(&src, &worktree_path.join(WORKSPACE_FILE)) {
        Ok(()) => {
            output.step(&format!("copied {WORKSPACE_FILE}"));
            Outcome::Ok
        }
        Err(err) => {
            let warning = format!("worktree created, but workspace config copy failed: {err}");
            output.warning(&warning);
            Outcome::Degraded(warning)
        }
    }
}
