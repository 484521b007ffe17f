//! Forwarder implementations
//!
//! One adapter per destination technology, plus the closed-variant
//! [`AnyForwarder`] wrapper the registry stores.

mod event_bus;
mod fifo_queue;
mod function;
mod queue;
mod topic;

pub use self::event_bus::EventBusForwarder;
pub use self::fifo_queue::FifoQueueForwarder;
pub use self::function::FunctionForwarder;
pub use self::queue::QueueForwarder;
pub use self::topic::TopicForwarder;

use contracts::{
    DestinationKind, Forwarder, ForwarderEntry, PublishClient, PublishReceipt, RelayError,
};

/// Shared empty-payload guard: `push("")` never reaches the destination
pub(crate) fn guard_not_empty(message: &str) -> Result<(), RelayError> {
    if message.is_empty() {
        return Err(RelayError::EmptyMessage);
    }
    Ok(())
}

/// Wrap a raw payload in the minimal publish envelope
pub(crate) fn wrap_body(message: &str) -> Result<String, RelayError> {
    Ok(serde_json::to_string(&serde_json::json!({ "body": message }))?)
}

/// Interpret a batch-style receipt: first failed entry wins
pub(crate) fn check_batch_receipt(name: &str, receipt: &PublishReceipt) -> Result<(), RelayError> {
    let Some(entry) = receipt.failed.first() else {
        return Ok(());
    };
    Err(match &entry.message {
        Some(detail) => RelayError::EntryRejected {
            forwarder: name.to_string(),
            detail: detail.clone(),
        },
        None => RelayError::UnexpectedDestination {
            forwarder: name.to_string(),
        },
    })
}

/// One adapter per destination technology, selected at configuration load
///
/// A closed enum rather than a trait object: the variant set is fixed and
/// async trait methods stay statically dispatched.
pub enum AnyForwarder<C> {
    Topic(TopicForwarder<C>),
    Queue(QueueForwarder<C>),
    FifoQueue(FifoQueueForwarder<C>),
    EventBus(EventBusForwarder<C>),
    Function(FunctionForwarder<C>),
}

impl<C: PublishClient + Sync> AnyForwarder<C> {
    /// Build the adapter matching the entry's destination kind
    pub fn from_entry(entry: &ForwarderEntry, client: C) -> Self {
        match entry.kind {
            DestinationKind::Topic => Self::Topic(TopicForwarder::new(entry, client)),
            DestinationKind::Queue => Self::Queue(QueueForwarder::new(entry, client)),
            DestinationKind::FifoQueue => Self::FifoQueue(FifoQueueForwarder::new(entry, client)),
            DestinationKind::EventBus => Self::EventBus(EventBusForwarder::new(entry, client)),
            DestinationKind::Function => Self::Function(FunctionForwarder::new(entry, client)),
        }
    }

    /// Destination kind of the wrapped adapter
    pub fn kind(&self) -> DestinationKind {
        match self {
            Self::Topic(_) => DestinationKind::Topic,
            Self::Queue(_) => DestinationKind::Queue,
            Self::FifoQueue(_) => DestinationKind::FifoQueue,
            Self::EventBus(_) => DestinationKind::EventBus,
            Self::Function(_) => DestinationKind::Function,
        }
    }
}

impl<C: PublishClient + Sync> Forwarder for AnyForwarder<C> {
    fn name(&self) -> &str {
        match self {
            Self::Topic(f) => f.name(),
            Self::Queue(f) => f.name(),
            Self::FifoQueue(f) => f.name(),
            Self::EventBus(f) => f.name(),
            Self::Function(f) => f.name(),
        }
    }

    async fn push(&self, message: &str) -> Result<(), RelayError> {
        match self {
            Self::Topic(f) => f.push(message).await,
            Self::Queue(f) => f.push(message).await,
            Self::FifoQueue(f) => f.push(message).await,
            Self::EventBus(f) => f.push(message).await,
            Self::Function(f) => f.push(message).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::FailedEntry;

    fn entry(kind: DestinationKind) -> ForwarderEntry {
        ForwarderEntry {
            name: "test".to_string(),
            kind,
            source: "src".to_string(),
            target: "https://dest/x".to_string(),
        }
    }

    #[test]
    fn test_wrap_body_escapes_quotes() {
        let payload = wrap_body(r#"say "hi""#).unwrap();
        assert_eq!(payload, r#"{"body":"say \"hi\""}"#);
    }

    #[test]
    fn test_check_batch_receipt_paths() {
        let ok = PublishReceipt::accepted("m-1");
        assert!(check_batch_receipt("bus", &ok).is_ok());

        let with_detail = PublishReceipt {
            message_id: String::new(),
            failed: vec![FailedEntry {
                code: Some("1234".to_string()),
                message: Some("Unhandled".to_string()),
            }],
        };
        let err = check_batch_receipt("bus", &with_detail).unwrap_err();
        assert!(matches!(
            err,
            RelayError::EntryRejected { ref detail, .. } if detail == "Unhandled"
        ));

        let without_detail = PublishReceipt {
            message_id: String::new(),
            failed: vec![FailedEntry::default()],
        };
        let err = check_batch_receipt("bus", &without_detail).unwrap_err();
        assert!(matches!(err, RelayError::UnexpectedDestination { .. }));
    }

    #[test]
    fn test_from_entry_selects_variant() {
        let client = clients::MockPublishClient::new();
        for kind in [
            DestinationKind::Topic,
            DestinationKind::Queue,
            DestinationKind::FifoQueue,
            DestinationKind::EventBus,
            DestinationKind::Function,
        ] {
            let forwarder = AnyForwarder::from_entry(&entry(kind), client.clone());
            assert_eq!(forwarder.kind(), kind);
            assert_eq!(forwarder.name(), "test");
        }
    }
}
