//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Push Relay - broker-to-destination message forwarder
#[derive(Parser, Debug)]
#[command(
    name = "push-relay",
    author,
    version,
    about = "Relay broker messages to managed push destinations",
    long_about = "Relays messages from broker queues to managed push destinations\n\
                  (topics, queues, FIFO queues, event buses, functions), decoding\n\
                  the legacy wire protocol where configured."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "PUSH_RELAY_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "PUSH_RELAY_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate configuration file without forwarding anything
    Validate(ValidateArgs),

    /// Display the configured forwarders
    Info(InfoArgs),

    /// Forward one message through a configured forwarder
    Send(SendArgs),
}

/// Arguments for the `validate` command
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, default_value = "relay.toml", env = "PUSH_RELAY_CONFIG")]
    pub config: PathBuf,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, default_value = "relay.toml", env = "PUSH_RELAY_CONFIG")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `send` command
#[derive(Parser, Debug, Clone)]
pub struct SendArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, default_value = "relay.toml", env = "PUSH_RELAY_CONFIG")]
    pub config: PathBuf,

    /// Source binding to route the message through
    #[arg(short, long)]
    pub source: String,

    /// Message text; read from stdin when omitted
    #[arg(short, long)]
    pub message: Option<String>,

    /// Expose Prometheus metrics on this port while sending
    #[arg(long, env = "PUSH_RELAY_METRICS_PORT")]
    pub metrics_port: Option<u16>,
}

/// Log output format selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-line output
    Pretty,
    /// Compact single-line output
    Compact,
    /// Structured JSON lines
    Json,
}
