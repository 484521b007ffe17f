//! Layered error definitions
//!
//! Categorized by source: config / translation / push / general

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum RelayError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Translation Errors =====
    /// Input contains no recognizable wire record
    #[error("invalid message, no wire records found: {message}")]
    InvalidMessageFormat { message: String },

    /// Wire record does not carry the REQUEST prefix
    #[error("non-request notification: {message}")]
    NonRequestNotification { message: String },

    /// Unknown discriminator, or too few fields for a known one
    #[error("malformed {kind} message: {message}")]
    MalformedMessage { kind: String, message: String },

    // ===== Push Errors =====
    /// Empty input to `push`; no publish attempt is made
    #[error("message is empty, forwarding skipped")]
    EmptyMessage,

    /// Destination reported a failed entry carrying a detail message
    #[error("destination rejected message: {detail}")]
    EntryRejected { forwarder: String, detail: String },

    /// Destination reported a batch failure with no usable detail
    #[error("unexpected destination error for forwarder '{forwarder}'")]
    UnexpectedDestination { forwarder: String },

    /// Network/vendor-level failure, surfaced verbatim
    #[error("transport error: {message}")]
    Transport { message: String },

    // ===== General Errors =====
    /// Payload serialization error
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl RelayError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create invalid-format error for input with no wire records
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidMessageFormat {
            message: message.into(),
        }
    }

    /// Create malformed-record error
    pub fn malformed(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedMessage {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// True for errors produced by the wire translator
    pub fn is_translation(&self) -> bool {
        matches!(
            self,
            Self::InvalidMessageFormat { .. }
                | Self::NonRequestNotification { .. }
                | Self::MalformedMessage { .. }
        )
    }
}
