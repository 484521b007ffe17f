//! Registry - source binding to forwarder routing

use std::collections::HashMap;

use contracts::{Forwarder, ForwarderEntry, PublishClient, RelayError};
use tracing::{info, instrument};

use crate::error::DispatchError;
use crate::forwarders::AnyForwarder;
use crate::metrics::{ForwarderMetrics, MetricsSnapshot};

struct Route<C> {
    forwarder: AnyForwarder<C>,
    metrics: ForwarderMetrics,
}

/// Routing table built once at configuration load
///
/// Exactly one adapter per entry, keyed by the entry's source binding. The
/// broker-consumption loop owns acknowledgement: a dispatch success
/// acknowledges, a failure triggers the caller's retry/requeue policy. The
/// registry never retries.
pub struct Registry<C: PublishClient> {
    routes: HashMap<String, Route<C>>,
}

impl<C: PublishClient + Sync> Registry<C> {
    /// Build one adapter per configuration entry
    ///
    /// Every adapter gets its own clone of `client`.
    ///
    /// # Errors
    /// `DuplicateSource` when two entries claim the same source binding.
    #[instrument(name = "registry_build", skip(entries, client), fields(entry_count = entries.len()))]
    pub fn from_entries(entries: &[ForwarderEntry], client: C) -> Result<Self, DispatchError>
    where
        C: Clone,
    {
        let mut routes = HashMap::with_capacity(entries.len());
        for entry in entries {
            if routes.contains_key(&entry.source) {
                return Err(DispatchError::DuplicateSource {
                    source_name: entry.source.clone(),
                });
            }
            routes.insert(
                entry.source.clone(),
                Route {
                    forwarder: AnyForwarder::from_entry(entry, client.clone()),
                    metrics: ForwarderMetrics::new(),
                },
            );
        }

        info!(forwarders = routes.len(), "registry built");
        Ok(Self { routes })
    }

    /// Adapter bound to `source`, if any
    pub fn lookup(&self, source: &str) -> Option<&AnyForwarder<C>> {
        self.routes.get(source).map(|route| &route.forwarder)
    }

    /// Route one inbound broker message to its forwarder
    ///
    /// # Errors
    /// `UnknownSource` when no forwarder is bound to `source`; forward
    /// errors otherwise, unchanged.
    pub async fn dispatch(&self, source: &str, message: &str) -> Result<(), DispatchError> {
        let route = self
            .routes
            .get(source)
            .ok_or_else(|| DispatchError::unknown_source(source))?;

        route.metrics.inc_attempt_count();
        match route.forwarder.push(message).await {
            Ok(()) => {
                route.metrics.inc_success_count();
                Ok(())
            }
            Err(e) => {
                route.metrics.inc_failure_count();
                Err(e.into())
            }
        }
    }

    /// Configured source bindings
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Get metrics for all forwarders
    pub fn metrics(&self) -> Vec<(String, MetricsSnapshot)> {
        self.routes
            .values()
            .map(|route| {
                (
                    route.forwarder.name().to_string(),
                    route.metrics.snapshot(),
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Convenience: true when the error is worth requeueing by the caller
///
/// Translation errors and empty messages are permanent for a given payload;
/// retrying them re-fails identically.
pub fn is_retryable(error: &DispatchError) -> bool {
    match error {
        DispatchError::UnknownSource { .. } | DispatchError::DuplicateSource { .. } => false,
        DispatchError::Contract(inner) => {
            !inner.is_translation() && !matches!(inner, RelayError::EmptyMessage)
        }
    }
}
