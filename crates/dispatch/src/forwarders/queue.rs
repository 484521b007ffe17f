//! QueueForwarder - plain message queue

use contracts::{Forwarder, ForwarderEntry, PublishClient, RelayError};
use tracing::{error, info, instrument};

use super::{guard_not_empty, wrap_body};

/// Forwarder for an unordered message queue
pub struct QueueForwarder<C> {
    name: String,
    target: String,
    client: C,
}

impl<C: PublishClient> QueueForwarder<C> {
    /// Create a new QueueForwarder bound to the entry's target queue
    pub fn new(entry: &ForwarderEntry, client: C) -> Self {
        info!(forwarder = %entry.name, target = %entry.target, "forwarder created");
        Self {
            name: entry.name.clone(),
            target: entry.target.clone(),
            client,
        }
    }
}

impl<C: PublishClient + Sync> Forwarder for QueueForwarder<C> {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "queue_push", skip(self, message), fields(forwarder = %self.name))]
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
