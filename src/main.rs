/// grove - Git worktree orchestration
///
/// Thin CLI frontend over the orchestration engine. Only startup failures
/// (missing git, bad root) are fatal; per-repository problems during a
/// scan surface as warnings and the rest of the scan proceeds.
use clap::{Parser, Subcommand};
use grove::output::{CliOutput, Output, OutputConfig};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "grove")]
#[command(version = grove::VERSION)]
#[command(about = "Manage Git worktrees across main/master-rooted repositories")]
#[command(long_about = r#"
grove manages repositories laid out under a single root, where each
repository directory contains its canonical checkout in a `main` or
`master` subdirectory and one sibling directory per worktree branch.

The root is taken from --root, then $GROVE_ROOT, then the current
directory.
"#)]
struct Cli {
    #[arg(long, global = true, help = "Repositories root directory")]
    root: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Suppress non-essential output")]
    quiet: bool,

    #[arg(short, long, global = true, help = "Show detailed progress")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "List repositories under the root")]
    Scan(commands::scan::Args),

    #[command(about = "List the worktrees of a repository")]
    List(commands::list::Args),

    #[command(about = "Create a worktree on a new branch")]
    Add(commands::add::Args),

    #[command(about = "Remove a worktree and delete its branch")]
    Remove(commands::remove::Args),

    #[command(about = "Open an editor on a worktree")]
    Open(commands::open::Args),
}

fn main() {
    let cli = Cli::parse();
    let mut output = CliOutput::new(OutputConfig::new(cli.quiet, cli.verbose));

    if let Err(err) = run(cli, &mut output) {
        output.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &mut CliOutput) -> anyhow::Result<()> {
    if which::which("git").is_err() {
        anyhow::bail!("git not found in PATH");
    }

    let root = commands::resolve_root(cli.root)?;

    match &cli.command {
        Command::Scan(args) => commands::scan::run(args, &root, output),
        Command::List(args) => commands::list::run(args, &root, output),
        Command::Add(args) => commands::add::run(args, &root, output),
        Command::Remove(args) => commands::remove::run(args, &root, output),
        Command::Open(args) => commands::open::run(args, &root, output),
    }
}
