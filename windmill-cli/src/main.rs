//! Windmill CLI - Command-line interface
//!
//! Commands:
//! - generate: Build schedules for every table count and write sheets and roster
//! - show: Print the schedule for a single table count

mod args;
mod generate;
mod show;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use generate::GenerateArgs;
use show::ShowArgs;

#[derive(Parser)]
#[command(name = "windmill")]
#[command(about = "Table seating schedules for multi-round quiz tournaments")]
struct Cli {
    /// Random seed (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate schedules, scoring sheets and the roster
    Generate(GenerateArgs),
    /// Print one scenario's seating to stdout
    Show(ShowArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(args, cli.seed),
        Commands::Show(args) => show::run(args, cli.seed),
    }
}
