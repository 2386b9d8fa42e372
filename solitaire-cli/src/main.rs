mod deal;
mod games;
mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solitaire_core::prelude::GameRegistry;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    /// Browse the built-in games
    Games {
        #[command(subcommand)]
        command: games::CliCommands,
    },
    /// Deal a game and show the opening position
    Deal(deal::DealArgs),
    /// Generate statistics
    Stats {
        #[command(subcommand)]
        command: stats::CliCommands,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let registry = GameRegistry::builtin()?;

    match &cli.command {
        CliCommands::Games { command } => games::run(&registry, command),
        CliCommands::Deal(args) => deal::run(&registry, args),
        CliCommands::Stats { command } => stats::run(&registry, command),
    }
}
