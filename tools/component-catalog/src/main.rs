//! Component Catalog CLI

use std::io;

use anyhow::Result;
use clap::Parser;

use component_catalog::{run, Command};
use component_telemetry::{init_logging, TelemetryConfig};

/// Inspect the platform component catalog
#[derive(Parser, Debug)]
#[command(name = "component-catalog")]
#[command(about = "Inspect platform components and their StoreType mapping")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = TelemetryConfig::from_env();
    config.service_name = "component-catalog".to_string();
    init_logging(&config)?;

    let mut stdout = io::stdout().lock();
    run(&args.command, &mut stdout)
}
