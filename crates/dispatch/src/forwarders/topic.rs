//! TopicForwarder - notification topic fan-out

use contracts::{Forwarder, ForwarderEntry, PublishClient, RelayError};
use tracing::{error, info, instrument};

use super::{guard_not_empty, wrap_body};

/// Forwarder for a pub/sub notification topic
pub struct TopicForwarder<C> {
    name: String,
    target: String,
    client: C,
}

impl<C: PublishClient> TopicForwarder<C> {
    /// Create a new TopicForwarder bound to the entry's target topic
    pub fn new(entry: &ForwarderEntry, client: C) -> Self {
        info!(forwarder = %entry.name, target = %entry.target, "forwarder created");
        Self {
            name: entry.name.clone(),
            target: entry.target.clone(),
            client,
        }
    }
}

impl<C: PublishClient + Sync> Forwarder for TopicForwarder<C> {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "topic_push", skip(self, message), fields(forwarder = %self.name))]
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
