//! parity-split CLI - Play the split-and-parity number game against a search engine
//!
//! This CLI provides:
//! - An interactive game against the computer (or computer self-play)
//! - Game tree and search-cost analysis for a row

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "parity-split")]
#[command(version, about = "Split-and-parity number game with minimax search", long_about = None)]
struct Cli {
    /// Enable informational logging (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer
    Play(parity_split::cli::commands::play::PlayArgs),

    /// Analyze the game tree and search cost for a row
    Analyze(parity_split::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_micros()
        .init();

    match cli.command {
        Commands::Play(args) => parity_split::cli::commands::play::execute(args),
        Commands::Analyze(args) => parity_split::cli::commands::analyze::execute(args),
    }
}
