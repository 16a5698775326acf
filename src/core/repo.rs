//! Repository discovery under a main/master-rooted layout.
//!
//! A repository directory is expected to contain its canonical checkout in
//! a `main` or `master` subdirectory, with worktrees as siblings:
//!
//! ```text
//! <root>/
//!   proj/
//!     main/                      <- canonical checkout
//!     feature-x/                 <- worktree of branch feature-x
//!     workspace.code-workspace   <- optional, lives inside main/
//! ```

use crate::error::EngineError;
use crate::output::Output;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// The canonical checkout directory of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalBranch {
    Main,
    Master,
}

impl CanonicalBranch {
    /// Branch name and directory name are the same under this layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Master => "master",
        }
    }
}

impl std::fmt::Display for CanonicalBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A repository directory that passed the layout check.
#[derive(Debug, Clone, Serialize)]
pub struct RepoRoot {
    /// Directory name under the scan root.
    pub name: String,
    /// Full path of the repository directory.
    pub path: PathBuf,
    /// Which canonical checkout anchors it.
    pub canonical: CanonicalBranch,
}

impl RepoRoot {
    /// Path of the canonical checkout directory.
    pub fn canonical_path(&self) -> PathBuf {
        self.path.join(self.canonical.as_str())
    }
}

/// Resolve the canonical checkout of `repo_path`.
///
/// `main` wins when both exist; that ambiguity is the caller's to surface
/// (see [`scan_repositories`]). Neither present is a layout violation.
pub fn resolve_canonical(repo_path: &Path) -> Result<CanonicalBranch, EngineError> {
    if repo_path.join("main").is_dir() {
        Ok(CanonicalBranch::Main)
    } else if repo_path.join("master").is_dir() {
        Ok(CanonicalBranch::Master)
    } else {
        Err(EngineError::LayoutViolation(repo_path.to_path_buf()))
    }
}

/// Whether `repo_path` has both `main` and `master` directories.
fn has_ambiguous_layout(repo_path: &Path) -> bool {
    repo_path.join("main").is_dir() && repo_path.join("master").is_dir()
}

/// List repositories directly under `root` that follow the layout.
///
/// Non-directories are skipped. Candidates without a canonical checkout
/// are skipped with a warning; one malformed repository must not abort
/// the scan of the rest. Only an unreadable `root` is a hard error.
/// Results are sorted by name for stable output.
pub fn scan_repositories(
    root: &Path,
    output: &mut dyn Output,
) -> Result<Vec<RepoRoot>, EngineError> {
    let mut repos = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        match resolve_canonical(&path) {
            Ok(canonical) => {
                if has_ambiguous_layout(&path) {
                    output.warning(&format!(
                        "{name}: both main and master exist, using {canonical}"
                    ));
                }
                repos.push(RepoRoot {
                    name,
                    path,
                    canonical,
                });
            }
            Err(err) => {
                output.warning(&format!("skipping {name}: {err}"));
            }
        }
    }

    repos.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(repos)
}
