//! Mock Relay Demo
//!
//! Demonstrates the full routing path against the mock publish client.
//! Runs without any broker or destination services.
//!
//! Run with: cargo run --bin mock_relay

use clients::MockPublishClient;
use config_loader::{ConfigFormat, ConfigLoader};
use dispatch::Registry;

const DEMO_CONFIG: &str = r#"
[[forwarders]]
name = "orders-topic"
kind = "topic"
source = "orders"
target = "https://topics/orders"

[[forwarders]]
name = "requests-fifo"
kind = "fifo_queue"
source = "requests"
target = "https://queues/requests.fifo"
"#;

const DEMO_LEGACY_MESSAGE: &str = "%BRONOT 'REQUEST','demo-host','REQ_ADDED','R1','MAT1','DestX','','Calculated','','demo-host'%%BRONOT 'REQUEST','demo-host','TRAN_PROGRESS','R2','T7','5','Copying','demo-host'%";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Mock Relay Demo");

    // ==== Stage 1: Load configuration ====
    let config = ConfigLoader::load_from_str(DEMO_CONFIG, ConfigFormat::Toml)?;
    tracing::info!(forwarders = config.forwarders.len(), "Configuration loaded");

    // ==== Stage 2: Build registry with mock client ====
    let client = MockPublishClient::new();
    let registry = Registry::from_entries(&config.forwarders, client.clone())?;

    // ==== Stage 3: Route messages ====
    registry.dispatch("orders", "order #42 shipped").await?;
    registry.dispatch("requests", DEMO_LEGACY_MESSAGE).await?;

    // ==== Stage 4: Report what reached the destinations ====
    for call in client.calls() {
        tracing::info!(
            target = %call.target,
            group_key = call.group_key.as_deref().unwrap_or("-"),
            payload = %call.payload,
            "Published"
        );
    }

    for (name, snapshot) in registry.metrics() {
        tracing::info!(
            forwarder = %name,
            attempts = snapshot.attempt_count,
            succeeded = snapshot.success_count,
            failed = snapshot.failure_count,
            "Forwarder stats"
        );
    }

    tracing::info!("Mock Relay Demo complete");
    Ok(())
}
