//! # Integration Tests
//!
//! End-to-end tests over the full relay path without external services:
//! configuration text in, mock publish calls out.

#[cfg(test)]
mod contract_tests {
    #[test]
    fn test_contracts_compile() {
        // Verify the contracts crate surface is intact
        let _ = contracts::ConfigVersion::V1;
        let _ = contracts::DestinationKind::FifoQueue;
    }
}

#[cfg(test)]
mod translation_tests {
    /// N well-formed records with distinct request ids yield exactly N entries
    #[test]
    fn test_entry_count_matches_record_count() {
        let mut raw = String::new();
        for i in 0..5 {
            raw.push_str(&format!(
                "%BRONOT 'REQUEST','host','TRAN_PROGRESS','R{i}','T{i}','{i}','Copying','host'%"
            ));
        }
        let batch = wire_translator::translate(&raw).unwrap();
        assert_eq!(batch.len(), 5);
    }

    /// Metric helpers are safe without an installed recorder
    #[test]
    fn test_metric_recording_smoke() {
        observability::record_message_received("orders");
        observability::record_forward_success("orders-topic", 3.5);
        observability::record_forward_failure("orders-topic");
        observability::record_translation_failure();
    }
}

#[cfg(test)]
mod e2e_tests {
    use clients::{MockConfig, MockPublishClient};
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{FailedEntry, RelayError};
    use dispatch::{DispatchError, Registry};

    const CONFIG: &str = r#"
[[forwarders]]
name = "orders-topic"
kind = "topic"
source = "orders"
target = "https://topics/orders"

[[forwarders]]
name = "audit-bus"
kind = "event_bus"
source = "audit"
target = "https://buses/audit"

[[forwarders]]
name = "requests-fifo"
kind = "fifo_queue"
source = "requests"
target = "https://queues/requests.fifo"
"#;

    const LEGACY_TWO_RECORDS: &str = "%BRONOT 'REQUEST','h-1','REQ_ADDED','R1','MAT1','DestX','','Calculated','','h-1'%%BRONOT 'REQUEST','h-2','TRAN_PROGRESS','R2','T7','5','Copying','h-2'%";

    fn registry(client: MockPublishClient) -> Registry<MockPublishClient> {
        let config = ConfigLoader::load_from_str(CONFIG, ConfigFormat::Toml).unwrap();
        Registry::from_entries(&config.forwarders, client).unwrap()
    }

    /// End-to-end: config -> registry -> direct forwarder -> mock publish
    #[tokio::test]
    async fn test_e2e_direct_forward() {
        let client = MockPublishClient::new();
        let registry = registry(client.clone());

        registry.dispatch("orders", "order #42 shipped").await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].target, "https://topics/orders");
        assert_eq!(calls[0].payload, r#"{"body":"order #42 shipped"}"#);
        assert_eq!(calls[0].group_key, None);
    }

    /// End-to-end: one legacy message fans out to one publish per record,
    /// grouped by request id, in source order
    #[tokio::test]
    async fn test_e2e_translating_forward() {
        let client = MockPublishClient::new();
        let registry = registry(client.clone());

        registry.dispatch("requests", LEGACY_TWO_RECORDS).await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].group_key.as_deref(), Some("R1"));
        assert_eq!(calls[1].group_key.as_deref(), Some("R2"));
        assert!(calls[0].payload.contains(r#""MessageType":"REQ_ADDED""#));
        assert!(calls[1].payload.contains(r#""Progress":"5""#));
        // Internal-only fields never leave the translator
        assert!(!calls[0].payload.contains("h-1"));
    }

    /// Records sharing a request id collapse to a single publish
    #[tokio::test]
    async fn test_e2e_shared_request_id_collapses() {
        let shared = LEGACY_TWO_RECORDS.replace("R2", "R1");
        let client = MockPublishClient::new();
        let registry = registry(client.clone());

        registry.dispatch("requests", &shared).await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        // Later record wins
        assert!(calls[0].payload.contains(r#""MessageType":"TRAN_PROGRESS""#));
    }

    /// Empty input never reaches a destination, whatever the adapter kind
    #[tokio::test]
    async fn test_e2e_empty_message_guard() {
        let client = MockPublishClient::new();
        let registry = registry(client.clone());

        for source in ["orders", "audit", "requests"] {
            let err = registry.dispatch(source, "").await.unwrap_err();
            assert!(matches!(
                err,
                DispatchError::Contract(RelayError::EmptyMessage)
            ));
        }
        assert_eq!(client.call_count(), 0);
    }

    /// Translation failures propagate unchanged and publish nothing
    #[tokio::test]
    async fn test_e2e_translation_failure() {
        let client = MockPublishClient::new();
        let registry = registry(client.clone());

        let err = registry.dispatch("requests", "something").await.unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Contract(RelayError::InvalidMessageFormat { .. })
        ));
        assert_eq!(client.call_count(), 0);
    }

    /// Partial batch failure: delivered prefix stays delivered, remainder
    /// is dropped, error surfaces to the caller
    #[tokio::test]
    async fn test_e2e_partial_batch_failure() {
        let client = MockPublishClient::with_config(MockConfig {
            fail_after: Some(1),
            ..Default::default()
        });
        let registry = registry(client.clone());

        let err = registry
            .dispatch("requests", LEGACY_TWO_RECORDS)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Contract(RelayError::Transport { .. })
        ));
        assert_eq!(client.call_count(), 2);

        let metrics = registry.metrics();
        let (_, snapshot) = metrics
            .iter()
            .find(|(name, _)| name == "requests-fifo")
            .unwrap();
        assert_eq!(snapshot.failure_count, 1);
    }

    /// A rejected batch entry surfaces its exact detail text
    #[tokio::test]
    async fn test_e2e_bus_entry_rejection() {
        let client = MockPublishClient::with_config(MockConfig {
            failed_entries: vec![FailedEntry {
                code: Some("1234".to_string()),
                message: Some("Unhandled".to_string()),
            }],
            ..Default::default()
        });
        let registry = registry(client);

        let err = registry.dispatch("audit", "abc").await.unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Contract(RelayError::EntryRejected { ref detail, .. })
                if detail == "Unhandled"
        ));
    }

    /// Messages from unbound sources are refused before any publish
    #[tokio::test]
    async fn test_e2e_unknown_source() {
        let client = MockPublishClient::new();
        let registry = registry(client.clone());

        let err = registry.dispatch("nowhere", "abc").await.unwrap_err();
        assert!(matches!(err, DispatchError::UnknownSource { .. }));
        assert_eq!(client.call_count(), 0);
    }

    /// Concurrent pushes through one shared registry
    #[tokio::test]
    async fn test_e2e_concurrent_dispatch() {
        let client = MockPublishClient::new();
        let registry = std::sync::Arc::new(registry(client.clone()));

        let mut handles = Vec::new();
        for i in 0..8 {
            let registry = std::sync::Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                registry
                    .dispatch("orders", &format!("message {i}"))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(client.call_count(), 8);
        let metrics = registry.metrics();
        let (_, snapshot) = metrics
            .iter()
            .find(|(name, _)| name == "orders-topic")
            .unwrap();
        assert_eq!(snapshot.success_count, 8);
    }
}
