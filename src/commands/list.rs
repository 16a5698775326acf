//! `grove list` — list the worktrees of one repository.

use super::load_repo;
use anyhow::{Context, Result};
use grove::list_worktrees;
use grove::output::Output;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

#[derive(clap::Args)]
pub struct Args {
    #[arg(help = "Repository name under the root")]
    pub repo: String,

    #[arg(long, help = "Output in JSON format")]
    pub json: bool,
}

pub fn run(args: &Args, root: &Path, output: &mut dyn Output) -> Result<()> {
    let repo = load_repo(root, &args.repo)?;
    let entries = list_worktrees(&repo, output)
        .with_context(|| format!("failed to list worktrees of {}", repo.name))?;

    if args.json {
        output.raw(&serde_json::to_string_pretty(&entries)?);
        output.raw("\n");
        return Ok(());
    }

    if entries.is_empty() {
        output.info("no worktrees found, add a new worktree!");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Branch", "Path"]);
    for entry in &entries {
        builder.push_record([entry.branch.clone(), entry.path.display().to_string()]);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    output.raw(&format!("{table}\n"));
    Ok(())
}
