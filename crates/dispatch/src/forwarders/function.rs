//! FunctionForwarder - serverless function invocation

use contracts::{Forwarder, ForwarderEntry, PublishClient, RelayError};
use tracing::{error, info, instrument};

use super::{guard_not_empty, wrap_body};

/// Forwarder invoking a serverless function per message
pub struct FunctionForwarder<C> {
    name: String,
    target: String,
    client: C,
}

impl<C: PublishClient> FunctionForwarder<C> {
    /// Create a new FunctionForwarder bound to the entry's target function
    pub fn new(entry: &ForwarderEntry, client: C) -> Self {
        info!(forwarder = %entry.name, target = %entry.target, "forwarder created");
        Self {
            name: entry.name.clone(),
            target: entry.target.clone(),
            client,
        }
    }
}

impl<C: PublishClient + Sync> Forwarder for FunctionForwarder<C> {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "function_push", skip(self, message), fields(forwarder = %self.name))]
    async fn push(&self, message: &str) -> Result<(), RelayError> {
        guard_not_empty(message)?;
        let payload = wrap_body(message)?;

        match self.client.publish_one(&self.target, &payload, None).await {
            Ok(receipt) => {
                info!(
                    forwarder = %self.name,
                    message_id = %receipt.message_id,
                    "forward succeeded"
                );
                Ok(())
            }
            Err(e) => {
                error!(forwarder = %self.name, error = %e, "could not forward message");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clients::MockPublishClient;

    fn entry() -> ForwarderEntry {
        ForwarderEntry {
            name: "fn-test".to_string(),
            kind: contracts::DestinationKind::Function,
            source: "invocations".to_string(),
            target: "https://functions/handler".to_string(),
        }
    }

    #[tokio::test]
    async fn test_push_invokes_once_with_envelope() {
        let client = MockPublishClient::new();
        let forwarder = FunctionForwarder::new(&entry(), client.clone());

        forwarder.push("input").await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].payload, r#"{"body":"input"}"#);
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected() {
        let client = MockPublishClient::new();
        let forwarder = FunctionForwarder::new(&entry(), client.clone());

        assert!(matches!(
            forwarder.push("").await.unwrap_err(),
            RelayError::EmptyMessage
        ));
        assert_eq!(client.call_count(), 0);
    }
}
