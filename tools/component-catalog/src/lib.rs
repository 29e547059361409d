//! Component Catalog: inspect the component registry from a shell.
//!
//! - `list` prints every component with its capabilities and wire value.
//! - `encode <name>` prints the StoreType a component announces.
//! - `decode <value>` resolves a StoreType name or raw integer.

use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use component_registry::{entries, from_proto, from_proto_value, lookup_store_api, StoreApi};
use component_telemetry::component_event;
use shared_types::StoreType;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every component
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the StoreType of a StoreAPI component
    Encode {
        /// Component display name
        name: String,
        /// Print UNKNOWN instead of failing when the protocol has no entry
        #[arg(long)]
        legacy: bool,
    },
    /// Resolve a StoreType name or integer to a component
    Decode {
        /// StoreType name (e.g. SIDECAR) or wire integer (e.g. 3)
        value: String,
    },
}

/// Run `command`, writing its output to `out`.
pub fn run(command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::List { json } => list(*json, out),
        Command::Encode { name, legacy } => encode(name, *legacy, out),
        Command::Decode { value } => decode(value, out),
    }
}

fn list(json: bool, out: &mut impl Write) -> Result<()> {
    let entries = entries();

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries).context("serializing catalog")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:<12} {:<16} {}", "COMPONENT", "CAPABILITIES", "STORE TYPE")?;
    for entry in &entries {
        let store_type = entry
            .store_type
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        writeln!(out, "{:<12} {:<16} {}", entry.name, entry.capabilities, store_type)?;
    }
    Ok(())
}

fn encode(name: &str, legacy: bool, out: &mut impl Write) -> Result<()> {
    let component = lookup_store_api(name)?;
    let store_type = if legacy {
        component.to_proto_or_unknown()
    } else {
        component.to_proto()?
    };

    component_event!(debug, component, "Encoded component", store_type = %store_type);
    writeln!(out, "{} {}", store_type, store_type.as_i32())?;
    Ok(())
}

fn decode(value: &str, out: &mut impl Write) -> Result<()> {
    let component = match value.parse::<i32>() {
        Ok(raw) => from_proto_value(raw),
        Err(_) => {
            let store_type: StoreType = value.to_ascii_uppercase().parse()?;
            from_proto(store_type)
        }
    };

    let Some(component) = component else {
        bail!("No component announces store type {value}");
    };

    writeln!(out, "{component}")?;
    Ok(())
}
