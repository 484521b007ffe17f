//! Relay metric recording
//!
//! Free functions over the `metrics` macros, called from the glue layer per
//! routed message. Forwarder-local counters live in `dispatch::metrics`;
//! these are the process-wide series the Prometheus exporter serves.

use metrics::{counter, histogram};

/// Record one inbound broker message
pub fn record_message_received(source: &str) {
    counter!("push_relay_messages_total", "source" => source.to_string()).increment(1);
}

/// Record a successful forward and its duration
pub fn record_forward_success(forwarder: &str, elapsed_ms: f64) {
    counter!("push_relay_forwards_succeeded_total", "forwarder" => forwarder.to_string())
        .increment(1);
    histogram!("push_relay_forward_duration_ms", "forwarder" => forwarder.to_string())
        .record(elapsed_ms);
}

/// Record a failed forward
pub fn record_forward_failure(forwarder: &str) {
    counter!("push_relay_forwards_failed_total", "forwarder" => forwarder.to_string()).increment(1);
}

/// Record a wire-translation failure
pub fn record_translation_failure() {
    counter!("push_relay_translation_failures_total").increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        // No recorder installed in unit tests; calls must not panic
        record_message_received("orders");
        record_forward_success("orders-topic", 12.5);
        record_forward_failure("orders-topic");
        record_translation_failure();
    }
}
