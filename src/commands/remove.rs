//! `grove remove` — remove a worktree and delete its branch.

use super::{find_worktree, load_repo};
use anyhow::Result;
use grove::output::Output;
use grove::{remove_worktree, DirectoryContext};
use std::path::Path;

#[derive(clap::Args)]
pub struct Args {
    #[arg(help = "Repository name under the root")]
    pub repo: String,

    #[arg(help = "Branch whose worktree should be removed")]
    pub branch: String,
}

pub fn run(args: &Args, root: &Path, output: &mut dyn Output) -> Result<()> {
    let repo = load_repo(root, &args.repo)?;
    let entry = find_worktree(&repo, &args.branch, output)?;

    // The session context sits inside the worktree, the way an interactive
    // session would after selecting it; the engine ascends back out.
    let mut ctx = DirectoryContext::new(root);
    ctx.push(&args.repo);
    for segment in args.branch.split('/') {
        ctx.push(segment);
    }

    remove_worktree(&mut ctx, &entry.path, &args.branch, output)?;
    Ok(())
}
