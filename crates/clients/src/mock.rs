//! Mock publish client
//!
//! Mock implementation for unit tests, supporting failure-scenario injection
//! and call recording.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use contracts::{FailedEntry, PublishClient, PublishReceipt, RelayError};
use tracing::instrument;

/// Mock client configuration
#[derive(Debug, Default, Clone)]
pub struct MockConfig {
    /// Targets whose publishes fail at transport level
    pub fail_targets: Vec<String>,
    /// Fail at transport level once this many calls have been recorded
    pub fail_after: Option<usize>,
    /// Failed entries reported in every receipt (batch-style rejection)
    pub failed_entries: Vec<FailedEntry>,
}

/// One recorded publish call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPublish {
    pub target: String,
    pub payload: String,
    pub group_key: Option<String>,
}

/// Mock publish client
///
/// Cheap to clone; clones share the recorded call log.
#[derive(Debug, Clone, Default)]
pub struct MockPublishClient {
    inner: Arc<MockInner>,
}

#[derive(Debug, Default)]
struct MockInner {
    config: MockConfig,
    next_message_id: AtomicU64,
    calls: Mutex<Vec<RecordedPublish>>,
}

impl MockPublishClient {
    /// Create a mock that accepts every publish
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with injected failure scenarios
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            inner: Arc::new(MockInner {
                config,
                next_message_id: AtomicU64::new(0),
                calls: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Number of publish attempts made so far
    pub fn call_count(&self) -> usize {
        self.inner.calls.lock().unwrap().len()
    }

    /// Snapshot of all recorded publish attempts, in call order
    pub fn calls(&self) -> Vec<RecordedPublish> {
        self.inner.calls.lock().unwrap().clone()
    }

    fn record(&self, target: &str, payload: &str, group_key: Option<&str>) -> usize {
        let mut calls = self.inner.calls.lock().unwrap();
        calls.push(RecordedPublish {
            target: target.to_string(),
            payload: payload.to_string(),
            group_key: group_key.map(str::to_string),
        });
        calls.len()
    }
}

impl PublishClient for MockPublishClient {
    #[instrument(name = "mock_publish_one", skip(self, payload), fields(target = %target))]
    async fn publish_one(
        &self,
        target: &str,
        payload: &str,
        group_key: Option<&str>,
    ) -> Result<PublishReceipt, RelayError> {
        let call_number = self.record(target, payload, group_key);

        if self.inner.config.fail_targets.iter().any(|t| t == target) {
            return Err(RelayError::transport(format!(
                "mock failure for target '{target}'"
            )));
        }
        if let Some(limit) = self.inner.config.fail_after {
            if call_number > limit {
                return Err(RelayError::transport(format!(
                    "mock failure on call {call_number}"
                )));
            }
        }

        let id = self.inner.next_message_id.fetch_add(1, Ordering::SeqCst);
        Ok(PublishReceipt {
            message_id: format!("mock-{id}"),
            failed: self.inner.config.failed_entries.clone(),
        })
    }
}
