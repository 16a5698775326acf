//! Command modules for the grove binary.
//!
//! Each module is a thin adapter: parse arguments, call into the engine,
//! render through the output sink. No engine logic lives here.

pub mod add;
pub mod list;
pub mod open;
pub mod remove;
pub mod scan;

use anyhow::{Context, Result};
use grove::output::Output;
use grove::{list_worktrees, resolve_canonical, EngineError, RepoRoot, WorktreeEntry};
use std::path::{Path, PathBuf};

/// Resolve the repositories root: `--root` flag, then the environment
/// variable, then the current directory. A root that is not a directory
/// is a startup failure and therefore fatal.
pub fn resolve_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    let root = flag
        .or_else(|| std::env::var_os(grove::ROOT_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    if !root.is_dir() {
        anyhow::bail!("repositories root is not a directory: {}", root.display());
    }
    Ok(root)
}

/// Resolve one named repository under `root`, checking its layout.
pub fn load_repo(root: &Path, name: &str) -> Result<RepoRoot, EngineError> {
    let path = root.join(name);
    let canonical = resolve_canonical(&path)?;
    Ok(RepoRoot {
        name: name.to_string(),
        path,
        canonical,
    })
}

/// Find the worktree entry for `branch` in `repo`'s current listing.
pub fn find_worktree(
    repo: &RepoRoot,
    branch: &str,
    output: &mut dyn Output,
) -> Result<WorktreeEntry> {
    let entries = list_worktrees(repo, output)
        .with_context(|| format!("failed to list worktrees of {}", repo.name))?;
    entries
        .into_iter()
        .find(|e| e.branch == branch)
        .with_context(|| format!("no worktree for branch '{branch}' in {}", repo.name))
}
