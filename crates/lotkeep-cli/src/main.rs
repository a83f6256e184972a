//! # lotkeep CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// lotkeep: size-classed lot allocation with single-use tickets.
#[derive(Parser, Debug)]
#[command(name = "lotkeep", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run a park/unpark session reading commands from stdin.
    Gate(lotkeep_cli::gate::GateArgs),
    /// Print the resolved lot capacities.
    Capacity(lotkeep_cli::capacity::CapacityArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs to stderr; stdout is the response stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Gate(args) => lotkeep_cli::gate::run_gate(&args),
        Commands::Capacity(args) => lotkeep_cli::capacity::run_capacity(&args),
    }
}
