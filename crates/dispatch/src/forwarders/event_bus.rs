//! EventBusForwarder - event bus publish
//!
//! The bus reports per-entry outcomes even for a single entry, so a
//! successful transport call can still carry a rejected entry.

use contracts::{Forwarder, ForwarderEntry, PublishClient, RelayError};
use tracing::{error, info, instrument};

use super::{check_batch_receipt, guard_not_empty, wrap_body};

/// Forwarder for an event bus destination
pub struct EventBusForwarder<C> {
    name: String,
    target: String,
    client: C,
}

impl<C: PublishClient> EventBusForwarder<C> {
    /// Create a new EventBusForwarder bound to the entry's target bus
    pub fn new(entry: &ForwarderEntry, client: C) -> Self {
        info!(forwarder = %entry.name, target = %entry.target, "forwarder created");
        Self {
            name: entry.name.clone(),
            target: entry.target.clone(),
            client,
        }
    }
}

impl<C: PublishClient + Sync> Forwarder for EventBusForwarder<C> {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "event_bus_push", skip(self, message), fields(forwarder = %self.name))]
    async fn push(&self, message: &str) -> Result<(), RelayError> {
        guard_not_empty(message)?;
        let payload = wrap_body(message)?;

        let receipt = match self.client.publish_one(&self.target, &payload, None).await {
            Ok(receipt) => receipt,
            Err(e) => {
                error!(forwarder = %self.name, error = %e, "could not forward message");
                return Err(e);
            }
        };

        if let Err(e) = check_batch_receipt(&self.name, &receipt) {
            error!(forwarder = %self.name, error = %e, "could not forward message");
            return Err(e);
        }

        info!(
            forwarder = %self.name,
            message_id = %receipt.message_id,
            "forward succeeded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clients::{MockConfig, MockPublishClient};
    use contracts::FailedEntry;

    fn entry() -> ForwarderEntry {
        ForwarderEntry {
            name: "bus-test".to_string(),
            kind: contracts::DestinationKind::EventBus,
            source: "events".to_string(),
            target: "https://buses/main".to_string(),
        }
    }

    #[tokio::test]
    async fn test_zero_failed_entries_is_success() {
        let client = MockPublishClient::new();
        let forwarder = EventBusForwarder::new(&entry(), client.clone());

        forwarder.push("abc").await.unwrap();
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_entry_detail_is_surfaced() {
        let client = MockPublishClient::with_config(MockConfig {
            failed_entries: vec![FailedEntry {
                code: Some("1234".to_string()),
                message: Some("Unhandled".to_string()),
            }],
            ..Default::default()
        });
        let forwarder = EventBusForwarder::new(&entry(), client);

        let err = forwarder.push("abc").await.unwrap_err();
        assert!(matches!(
            err,
            RelayError::EntryRejected { ref detail, .. } if detail == "Unhandled"
        ));
    }

    #[tokio::test]
    async fn test_failed_entry_without_detail_is_unexpected() {
        let client = MockPublishClient::with_config(MockConfig {
            failed_entries: vec![FailedEntry::default()],
            ..Default::default()
        });
        let forwarder = EventBusForwarder::new(&entry(), client);

        let err = forwarder.push("abc").await.unwrap_err();
        assert!(matches!(err, RelayError::UnexpectedDestination { .. }));
    }

    #[tokio::test]
    async fn test_empty_message_makes_no_call() {
        let client = MockPublishClient::new();
        let forwarder = EventBusForwarder::new(&entry(), client.clone());

        assert!(matches!(
            forwarder.push("").await.unwrap_err(),
            RelayError::EmptyMessage
        ));
        assert_eq!(client.call_count(), 0);
    }
}
