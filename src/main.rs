//! exbranch binary - interactive conflict solver for experiment branching

mod cli;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Interactive conflict solver for experiment configuration branching
#[derive(Debug, Parser)]
#[command(name = "exbranch", version, about)]
struct Cli {
    /// Conflict snapshot to solve (TOML)
    snapshot: PathBuf,

    /// Write committed operations to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    cli::run(&args.snapshot, args.output.as_deref())
        .with_context(|| format!("failed to solve {}", args.snapshot.display()))
}
