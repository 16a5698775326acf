//! Launching an editor on a worktree.

use crate::error::EngineError;
use crate::exec::spawn_detached;
use crate::output::Output;
use crate::WORKSPACE_FILE;
use std::path::Path;

/// Open `editor` on `worktree_path`, fire-and-forget.
///
/// When the worktree carries a workspace config file, that file is passed
/// to the editor instead of the bare directory so project tooling loads.
/// The editor process is never waited on.
pub fn open_editor(
    worktree_path: &Path,
    editor: &str,
    output: &mut dyn Output,
) -> Result<(), EngineError> {
    let workspace = worktree_path.join(WORKSPACE_FILE);
    let target = if workspace.is_file() {
        workspace
    } else {
        worktree_path.to_path_buf()
    };

    output.info(&format!("opening {editor} on {}", target.display()));
    let target = target.to_string_lossy().into_owned();
    spawn_detached(editor, &[&target], worktree_path)
}
