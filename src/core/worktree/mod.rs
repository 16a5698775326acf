//! Worktree listing and lifecycle operations.

pub mod add;
pub mod list;
pub mod open;
pub mod remove;

pub use add::add_worktree;
pub use list::{list_worktrees, parse_worktree_porcelain, WorktreeEntry};
pub use open::open_editor;
pub use remove::remove_worktree;
