//! grove - Git worktree orchestration
//!
//! Manages multiple worktrees across repositories laid out under a single
//! root, where each repository contains a canonical `main` or `master`
//! checkout and one sibling directory per worktree branch.
//!
//! The engine is stateless between invocations: repositories and worktrees
//! are recomputed from the filesystem and from git on every query, so state
//! changed out-of-band is simply reflected on the next call. All external
//! commands run under a fixed deadline with an explicit working directory.

pub mod core;
pub mod error;
pub mod exec;
pub mod git;
pub mod output;
pub mod styles;
pub mod utils;

pub use crate::core::context::DirectoryContext;
pub use crate::core::repo::{resolve_canonical, scan_repositories, CanonicalBranch, RepoRoot};
pub use crate::core::worktree::{
    add_worktree, list_worktrees, open_editor, parse_worktree_porcelain, remove_worktree,
    WorktreeEntry,
};
pub use crate::core::Outcome;
pub use crate::error::EngineError;

/// Crate version, surfaced through the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the optional editor workspace config file propagated into new
/// worktrees from the canonical checkout.
pub const WORKSPACE_FILE: &str = "workspace.code-workspace";

/// Environment variable naming the repositories root.
pub const ROOT_ENV: &str = "GROVE_ROOT";

/// Environment variable overriding the editor command.
pub const EDITOR_ENV: &str = "GROVE_EDITOR";

/// Default editor command when [`EDITOR_ENV`] is unset.
pub const DEFAULT_EDITOR: &str = "code";
