//! Configuration validation
//!
//! Rules:
//! - forwarder names unique
//! - source bindings unique (the registry keys on them)
//! - name / source / target non-empty

use std::collections::HashSet;

use contracts::{RelayConfig, RelayError};

/// Validate a RelayConfig
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(config: &RelayConfig) -> Result<(), RelayError> {
    validate_required_fields(config)?;
    validate_unique_names(config)?;
    validate_unique_sources(config)?;
    Ok(())
}

fn validate_required_fields(config: &RelayConfig) -> Result<(), RelayError> {
    for (index, entry) in config.forwarders.iter().enumerate() {
        if entry.name.is_empty() {
            return Err(RelayError::config_validation(
                format!("forwarders[{index}].name"),
                "must not be empty",
            ));
        }
        if entry.source.is_empty() {
            return Err(RelayError::config_validation(
                format!("forwarders[{index}].source"),
                "must not be empty",
            ));
        }
        if entry.target.is_empty() {
            return Err(RelayError::config_validation(
                format!("forwarders[{index}].target"),
                "must not be empty",
            ));
        }
    }
    Ok(())
}

fn validate_unique_names(config: &RelayConfig) -> Result<(), RelayError> {
    let mut seen = HashSet::new();
    for entry in &config.forwarders {
        if !seen.insert(&entry.name) {
            return Err(RelayError::config_validation(
                format!("forwarders[name={}]", entry.name),
                "duplicate forwarder name",
            ));
        }
    }
    Ok(())
}

fn validate_unique_sources(config: &RelayConfig) -> Result<(), RelayError> {
    let mut seen = HashSet::new();
    for entry in &config.forwarders {
        if !seen.insert(&entry.source) {
            return Err(RelayError::config_validation(
                format!("forwarders[source={}]", entry.source),
                "duplicate source binding",
            ));
        }
    }
    Ok(())
}
