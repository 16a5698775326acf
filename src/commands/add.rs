//! `grove add` — create a worktree on a new branch.

use super::load_repo;
use anyhow::Result;
use grove::output::Output;
use grove::utils::validate_branch_name;
use grove::{add_worktree, Outcome};
use std::path::Path;

#[derive(clap::Args)]
pub struct Args {
    #[arg(help = "Repository name under the root")]
    pub repo: String,

    #[arg(help = "Name of the branch to create (no whitespace)")]
    pub branch: String,
}

pub fn run(args: &Args, root: &Path, output: &mut dyn Output) -> Result<()> {
    // Validate at the frontend before touching the engine; the engine
    // re-checks the same invariant.
    validate_branch_name(&args.branch)?;

    let repo = load_repo(root, &args.repo)?;
    match add_worktree(&repo, &args.branch, output)? {
        Outcome::Ok => {}
        Outcome::Degraded(warning) => {
            // The worktree exists, so the exit status stays zero; the
            // engine already rendered the warning.
            output.debug(&format!("degraded: {warning}"));
        }
    }
    Ok(())
}
