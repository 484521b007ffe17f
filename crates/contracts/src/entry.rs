//! RelayConfig - Config Loader output
//!
//! Describes the full relay routing table: one entry per broker source
//! binding, each naming the destination technology and target.

use serde::{Deserialize, Serialize};

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete relay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Forwarder definitions, one per configured destination
    pub forwarders: Vec<ForwarderEntry>,
}

/// One configured destination
///
/// Immutable after construction; owned by the dispatch registry and
/// read-only to adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwarderEntry {
    /// Unique forwarder name (used for logging/metrics)
    pub name: String,

    /// Destination technology
    pub kind: DestinationKind,

    /// Broker queue/exchange binding this forwarder consumes from
    pub source: String,

    /// Destination identifier (topic ARN, queue URL, bus name, function name)
    pub target: String,
}

/// Destination technology, closed variant set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    /// Notification topic (fan-out pub/sub)
    Topic,
    /// Plain message queue
    Queue,
    /// Ordered/FIFO queue fed by the legacy wire protocol
    FifoQueue,
    /// Event bus
    EventBus,
    /// Serverless function invocation
    Function,
}

impl DestinationKind {
    /// True for adapters that decode the legacy wire protocol before publishing
    pub fn translates(&self) -> bool {
        matches!(self, Self::FifoQueue)
    }

    /// Stable label for logs and metric tags
    pub fn label(&self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Queue => "queue",
            Self::FifoQueue => "fifo_queue",
            Self::EventBus => "event_bus",
            Self::Function => "function",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_deserializes_snake_case() {
        let entry: ForwarderEntry = toml::from_str(
            r#"
name = "requests"
kind = "fifo_queue"
source = "broker-requests"
target = "https://queue.example/requests.fifo"
"#,
        )
        .unwrap();
        assert_eq!(entry.kind, DestinationKind::FifoQueue);
        assert!(entry.kind.translates());
    }

    #[test]
    fn test_only_fifo_translates() {
        for kind in [
            DestinationKind::Topic,
            DestinationKind::Queue,
            DestinationKind::EventBus,
            DestinationKind::Function,
        ] {
            assert!(!kind.translates(), "{} should not translate", kind.label());
        }
    }
}
