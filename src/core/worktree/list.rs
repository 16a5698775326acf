//! Worktree enumeration via `git worktree list --porcelain`.

use crate::core::repo::RepoRoot;
use crate::error::EngineError;
use crate::git::GitCommand;
use crate::output::Output;
use serde::Serialize;
use std::path::PathBuf;

/// A worktree identified by its branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorktreeEntry {
    /// Branch name, stripped of the `refs/heads/` prefix.
    pub branch: String,
    /// Absolute path to the worktree directory.
    pub path: PathBuf,
}

/// Parse the porcelain output of `git worktree list --porcelain`.
///
/// Records start at a `worktree <path>` line, followed by attribute lines
/// (`HEAD <sha>`, `branch <ref>`, `bare`, `detached`) until the next
/// record or end of input. Records without a `branch` attribute (detached
/// HEAD, bare) are omitted: only branch-identified worktrees are offered
/// for selection. Input order is preserved; trailing blank lines and a
/// missing final newline are tolerated.
pub fn parse_worktree_porcelain(output: &str) -> Vec<WorktreeEntry> {
    let mut entries = Vec::new();
    let mut current_path: Option<PathBuf> = None;
    let mut current_branch: Option<String> = None;

    let mut flush = |path: Option<PathBuf>, branch: Option<String>| {
        if let (Some(path), Some(branch)) = (path, branch) {
            entries.push(WorktreeEntry { branch, path });
        }
    };

    for line in output.lines() {
        if let Some(path_str) = line.strip_prefix("worktree ") {
            flush(current_path.take(), current_branch.take());
            current_path = Some(PathBuf::from(path_str));
        } else if let Some(branch_ref) = line.strip_prefix("branch ") {
            current_branch = branch_ref
                .strip_prefix("refs/heads/")
                .map(str::trim)
                .map(String::from);
        }
    }
    // The last record has no following `worktree` line to flush it.
    flush(current_path.take(), current_branch.take());

    entries
}

/// List the worktrees of `repo`, recomputed from git on every call.
///
/// Runs a `git status` liveness probe in the canonical checkout first so
/// a broken repository surfaces as a command failure with stderr attached
/// rather than as an empty listing.
pub fn list_worktrees(
    repo: &RepoRoot,
    output: &mut dyn Output,
) -> Result<Vec<WorktreeEntry>, EngineError> {
    let git = GitCommand::new(repo.canonical_path());

    output.step(&format!("probing {}", repo.name));
    git.status_probe()?;

    let porcelain = git.worktree_list_porcelain()?;
    Ok(parse_worktree_porcelain(&porcelain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_records() {
        let input = "worktree /repos/proj/main\nbranch refs/heads/main\n\nworktree /repos/proj/feat\nbranch refs/heads/feat\n";
        let entries = parse_worktree_porcelain(input);
        assert_eq!(
            entries,
            vec![
                WorktreeEntry {
                    branch: "main".into(),
                    path: "/repos/proj/main".into(),
                },
                WorktreeEntry {
                    branch: "feat".into(),
                    path: "/repos/proj/feat".into(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_omits_detached_and_bare() {
        let input = "worktree /repos/proj/.bare\nbare\n\nworktree /repos/proj/main\nHEAD 1234abcd\nbranch refs/heads/main\n\nworktree /repos/proj/detached\nHEAD 5678efgh\ndetached\n";
        let entries = parse_worktree_porcelain(input);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].branch, "main");
    }

    #[test]
    fn test_parse_preserves_order() {
        let input = "worktree /a\nbranch refs/heads/zeta\n\nworktree /b\nbranch refs/heads/alpha\n";
        let branches: Vec<_> = parse_worktree_porcelain(input)
            .into_iter()
            .map(|e| e.branch)
            .collect();
        assert_eq!(branches, ["zeta", "alpha"]);
    }

    #[test]
    fn test_parse_no_trailing_newline() {
        let input = "worktree /repos/proj/main\nHEAD 1234\nbranch refs/heads/main";
        assert_eq!(parse_worktree_porcelain(input).len(), 1);
    }

    #[test]
    fn test_parse_trailing_blank_lines() {
        let base = "worktree /repos/proj/main\nbranch refs/heads/main\n";
        let with_blanks = format!("{base}\n\n\n");
        assert_eq!(
            parse_worktree_porcelain(base),
            parse_worktree_porcelain(&with_blanks)
        );
    }

    #[test]
    fn test_parse_nested_branch_name() {
        let input = "worktree /repos/proj/feature/x\nbranch refs/heads/feature/x\n";
        let entries = parse_worktree_porcelain(input);
        assert_eq!(entries[0].branch, "feature/x");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_worktree_porcelain("").is_empty());
    }
}
