//! PublishClient trait - vendor publish primitive
//!
//! Abstracts vendor publish APIs behind one call so adapters stay free of
//! vendor SDK types and tests can substitute a mock.

use crate::RelayError;

/// One publish call against a named destination
///
/// Implementations must be safe for concurrent use; adapters hold a client
/// handle and never lock around it.
#[trait_variant::make(PublishClient: Send)]
pub trait LocalPublishClient {
    /// Publish a single payload to `target`
    ///
    /// `group_key` carries the ordering/group key for FIFO destinations and
    /// is `None` everywhere else.
    ///
    /// # Errors
    /// Transport-level failures only. Per-entry rejections are reported in
    /// the receipt, not as an error.
    async fn publish_one(
        &self,
        target: &str,
        payload: &str,
        group_key: Option<&str>,
    ) -> Result<PublishReceipt, RelayError>;
}

/// Result of one publish call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Destination-assigned message id, empty when the vendor reports none
    pub message_id: String,

    /// Per-entry failures reported by batch-style destinations
    pub failed: Vec<FailedEntry>,
}

impl PublishReceipt {
    /// Receipt for an accepted publish
    pub fn accepted(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            failed: Vec::new(),
        }
    }
}

/// One failed entry from a batch-style destination response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailedEntry {
    pub code: Option<String>,
    pub message: Option<String>,
}
