// crates/palettepal-cli/src/main.rs

use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "palettepal-cli")]
#[command(about = "Randomized phase-pair palette search", long_about = None)]
pub struct Cli {
    /// Debug-level logging (RUST_LOG overrides)
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sample phase pairs, score them against a filter, keep the worthy ones
    Search(cmd::search::SearchArgs),

    /// Score a single specimen given its ensemble id
    Appraise(cmd::appraise::AppraiseArgs),

    /// Print the 64-entry master palette
    Master(cmd::master::MasterArgs),

    /// Print one RMS blend or the full 64x64 blend matrix
    Blend(cmd::blend::BlendArgs),
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Search(args) => cmd::search::run(args),
        Commands::Appraise(args) => cmd::appraise::run(args),
        Commands::Master(args) => cmd::master::run(args),
        Commands::Blend(args) => cmd::blend::run(args),
    }
}
