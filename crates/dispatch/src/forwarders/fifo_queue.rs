//! FifoQueueForwarder - ordered queue fed by the legacy wire protocol
//!
//! The one translating adapter: decodes the raw broker text first, then
//! publishes each decoded record individually with its request id as the
//! message group key. Batches are not transactional; the first publish
//! failure drops the remaining records and nothing already sent is undone.

use contracts::{Forwarder, ForwarderEntry, PublishClient, RelayError};
use tracing::{debug, error, info, instrument};

use super::guard_not_empty;

/// Forwarder for a FIFO queue consuming legacy wire-protocol messages
pub struct FifoQueueForwarder<C> {
    name: String,
    target: String,
    client: C,
}

impl<C: PublishClient> FifoQueueForwarder<C> {
    /// Create a new FifoQueueForwarder bound to the entry's target queue
    pub fn new(entry: &ForwarderEntry, client: C) -> Self {
        info!(forwarder = %entry.name, target = %entry.target, "forwarder created");
        Self {
            name: entry.name.clone(),
            target: entry.target.clone(),
            client,
        }
    }
}

impl<C: PublishClient + Sync> Forwarder for FifoQueueForwarder<C> {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "fifo_queue_push", skip(self, message), fields(forwarder = %self.name))]
    async fn push(&self, message: &str) -> Result<(), RelayError> {
        guard_not_empty(message)?;

        // One inbound message may decode to several records
        let batch = wire_translator::translate(message)?;

        for (request_id, payload) in batch.iter() {
            debug!(
                forwarder = %self.name,
                group_key = %request_id,
                body = %payload,
                "forwarding translated record"
            );

            match self
                .client
                .publish_one(&self.target, payload, Some(request_id))
                .await
            {
                Ok(receipt) => {
                    info!(
                        forwarder = %self.name,
                        message_id = %receipt.message_id,
                        "forward succeeded"
                    );
                }
                Err(e) => {
                    error!(forwarder = %self.name, error = %e, "could not forward message");
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}
