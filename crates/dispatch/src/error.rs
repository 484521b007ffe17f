//! Dispatch error types

use thiserror::Error;

/// Dispatch-specific errors
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No forwarder bound to the message's origin
    #[error("no forwarder bound to source '{source_name}'")]
    UnknownSource { source_name: String },

    /// Two configuration entries claim the same source binding
    #[error("duplicate source binding '{source_name}'")]
    DuplicateSource { source_name: String },

    /// Forward error (from contract)
    #[error("forward error: {0}")]
    Contract(#[from] contracts::RelayError),
}

impl DispatchError {
    /// Create an unknown-source error
    pub fn unknown_source(source: impl Into<String>) -> Self {
        Self::UnknownSource {
            source_name: source.into(),
        }
    }
}
