//! `send` command implementation.
//!
//! Drives exactly one message through the routing path the broker loop
//! would use: load config, build the registry with the ambient-credential
//! client, dispatch, report. Exit status stands in for ack/requeue.

use std::io::Read;
use std::time::Instant;

use anyhow::{Context, Result};
use clients::HttpPublishClient;
use dispatch::{is_retryable, Forwarder, Registry};
use tracing::{error, info, warn};

use crate::cli::SendArgs;

/// Execute the `send` command
pub async fn run_send(args: &SendArgs) -> Result<()> {
    let config = config_loader::ConfigLoader::load_from_path(&args.config)
        .context("Failed to load configuration")?;

    if let Some(port) = args.metrics_port {
        observability::init_metrics_only(port).context("Failed to start metrics endpoint")?;
    }

    let message = read_message(args)?;
    info!(source = %args.source, bytes = message.len(), "Sending message");

    let registry = Registry::from_entries(&config.forwarders, HttpPublishClient::from_env())
        .context("Failed to build forwarder registry")?;

    observability::record_message_received(&args.source);

    let started = Instant::now();
    match registry.dispatch(&args.source, &message).await {
        Ok(()) => {
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
            if let Some(forwarder) = registry.lookup(&args.source) {
                observability::record_forward_success(forwarder.name(), elapsed_ms);
            }
            info!(source = %args.source, elapsed_ms, "Message forwarded");
            println!("✓ Forwarded message from source '{}'", args.source);
            Ok(())
        }
        Err(e) => {
            if let Some(forwarder) = registry.lookup(&args.source) {
                observability::record_forward_failure(forwarder.name());
            }
            if matches!(
                e,
                dispatch::DispatchError::Contract(ref inner) if inner.is_translation()
            ) {
                observability::record_translation_failure();
            }

            if is_retryable(&e) {
                warn!(source = %args.source, error = %e, "Forward failed, message can be requeued");
            } else {
                error!(source = %args.source, error = %e, "Forward failed permanently");
            }
            Err(e.into())
        }
    }
}

/// Message from --message, or stdin when omitted
fn read_message(args: &SendArgs) -> Result<String> {
    if let Some(message) = &args.message {
        return Ok(message.clone());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read message from stdin")?;
    // Trailing newline from shells would end up inside the envelope
    Ok(buffer.trim_end_matches('\n').to_string())
}
