//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo {
    version: String,
    forwarders: Vec<ForwarderInfo>,
}

#[derive(Serialize)]
struct ForwarderInfo {
    name: String,
    kind: String,
    source: String,
    target: String,
    translating: bool,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration info");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let config = config_loader::ConfigLoader::load_from_path(&args.config)
        .context("Failed to load configuration")?;

    let config_info = ConfigInfo {
        version: format!("{:?}", config.version),
        forwarders: config
            .forwarders
            .iter()
            .map(|entry| ForwarderInfo {
                name: entry.name.clone(),
                kind: entry.kind.label().to_string(),
                source: entry.source.clone(),
                target: entry.target.clone(),
                translating: entry.kind.translates(),
            })
            .collect(),
    };

    if args.json {
        let json =
            serde_json::to_string_pretty(&config_info).context("Failed to serialize info")?;
        println!("{}", json);
    } else {
        print_info(&config_info);
    }

    Ok(())
}

fn print_info(info: &ConfigInfo) {
    println!("Configuration version: {}", info.version);
    println!("Forwarders: {}", info.forwarders.len());

    for forwarder in &info.forwarders {
        println!(
            "\n  {} ({}){}",
            forwarder.name,
            forwarder.kind,
            if forwarder.translating {
                " [translating]"
            } else {
                ""
            }
        );
        println!("    source: {}", forwarder.source);
        println!("    target: {}", forwarder.target);
    }
}
