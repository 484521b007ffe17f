//! # Dispatch
//!
//! Destination adapters and the routing registry.
//!
//! Responsible for:
//! - One adapter per configured destination (closed variant set)
//! - Routing inbound broker messages to the adapter bound to their source
//! - Uniform empty-payload guard and partial-failure semantics

pub mod error;
pub mod forwarders;
pub mod metrics;
pub mod registry;

pub use contracts::{Forwarder, PublishClient, RelayError};
pub use error::DispatchError;
pub use forwarders::{
    AnyForwarder, EventBusForwarder, FifoQueueForwarder, FunctionForwarder, QueueForwarder,
    TopicForwarder,
};
pub use metrics::{ForwarderMetrics, MetricsSnapshot};
pub use registry::{is_retryable, Registry};
