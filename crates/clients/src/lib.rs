//! # Clients
//!
//! Vendor publish clients behind the `PublishClient` seam.
//!
//! - [`HttpPublishClient`]: default client, POSTs to the destination target
//!   URL with ambient environment credentials
//! - [`MockPublishClient`]: failure-injectable recorder for tests and demos

mod http;
mod mock;

pub use http::HttpPublishClient;
pub use mock::{MockConfig, MockPublishClient, RecordedPublish};

/// Environment variable holding the bearer token for the default client
pub const TOKEN_ENV_VAR: &str = "PUSH_RELAY_TOKEN";
