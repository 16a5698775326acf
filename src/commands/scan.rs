//! `grove scan` — list repositories under the root.

use anyhow::Result;
use grove::output::Output;
use grove::scan_repositories;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

#[derive(clap::Args)]
pub struct Args {
    #[arg(long, help = "Output in JSON format")]
    pub json: bool,
}

pub fn run(args: &Args, root: &Path, output: &mut dyn Output) -> Result<()> {
    let repos = scan_repositories(root, output)?;

    if args.json {
        output.raw(&serde_json::to_string_pretty(&repos)?);
        output.raw("\n");
        return Ok(());
    }

    if repos.is_empty() {
        output.info("no repositories found");
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Repository", "Canonical", "Path"]);
    for repo in &repos {
        builder.push_record([
            repo.name.clone(),
            repo.canonical.to_string(),
            repo.path.display().to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    output.raw(&format!("{table}\n"));
    Ok(())
}
