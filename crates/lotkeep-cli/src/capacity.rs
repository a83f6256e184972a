//! # Capacity Subcommand
//!
//! Prints the capacities a `gate` session would open with, after the config
//! file and flag overrides are applied and validated.

use std::io::Write;

use clap::Args;

use lotkeep_facility::{FacilityCapacities, SizeClass};

use crate::config::FacilityArgs;

/// Arguments for the capacity subcommand.
#[derive(Args, Debug)]
pub struct CapacityArgs {
    #[command(flatten)]
    pub facility: FacilityArgs,

    /// Print JSON instead of one line per size class.
    #[arg(long)]
    pub json: bool,
}

/// Write the resolved capacities to `output`.
pub fn write_capacities<W: Write>(
    capacities: &FacilityCapacities,
    json: bool,
    mut output: W,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut output, capacities)?;
        writeln!(output)?;
    } else {
        for size in SizeClass::all() {
            writeln!(output, "{size} {}", capacities.get(*size))?;
        }
    }
    Ok(())
}

/// Run the capacity subcommand.
pub fn run_capacity(args: &CapacityArgs) -> anyhow::Result<()> {
    let capacities = args.facility.resolve()?;
    write_capacities(&capacities, args.json, std::io::stdout().lock())
}
