//! `grove open` — launch an editor on a worktree.

use super::{find_worktree, load_repo};
use anyhow::Result;
use grove::open_editor;
use grove::output::Output;
use std::path::Path;

#[derive(clap::Args)]
pub struct Args {
    #[arg(help = "Repository name under the root")]
    pub repo: String,

    #[arg(help = "Branch whose worktree should be opened")]
    pub branch: String,

    #[arg(long, help = "Editor command (falls back to $GROVE_EDITOR, then 'code')")]
    pub editor: Option<String>,
}

pub fn run(args: &Args, root: &Path, output: &mut dyn Output) -> Result<()> {
    let repo = load_repo(root, &args.repo)?;
    let entry = find_worktree(&repo, &args.branch, output)?;

    let editor = args
        .editor
        .clone()
        .or_else(|| std::env::var(grove::EDITOR_ENV).ok())
        .unwrap_or_else(|| grove::DEFAULT_EDITOR.to_string());

    // Fire-and-forget: a missing editor is reported, never fatal.
    if let Err(err) = open_editor(&entry.path, &editor, output) {
        output.error(&format!("failed to launch {editor}: {err}"));
    }
    Ok(())
}
