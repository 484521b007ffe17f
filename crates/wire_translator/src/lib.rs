//! # Wire Translator
//!
//! Pure, stateless decoder for the legacy delimited wire format.
//!
//! Responsibilities:
//! - Scan raw broker text for `%BRONOT '...'%` occurrences (several records
//!   may arrive concatenated in one message)
//! - Decode each occurrence into its record schema
//! - Serialize retained fields to JSON, keyed by request id
//!
//! No I/O and no shared state; the first failure aborts the whole
//! translation and no partial batch is returned.
//!
//! # Example
//!
//! ```
//! let raw = "%BRONOT 'REQUEST','ip-X','TRAN_PROGRESS','R1','T1','5','Copying','ip-X'%";
//! let batch = wire_translator::translate(raw).unwrap();
//! assert_eq!(batch.len(), 1);
//! assert!(batch.get("R1").unwrap().contains("TRAN_PROGRESS"));
//! ```

mod batch;
mod record;

pub use batch::TranslatedBatch;
pub use record::{RequestNotification, TransferProgressNotification, TransferUpdatedNotification};

use std::sync::OnceLock;

use contracts::RelayError;
use regex::Regex;
use tracing::debug;

const RECORD_PREFIX: &str = "%BRONOT '";
const RECORD_SUFFIX: &str = "'%";
const FIELD_DELIMITER: &str = "','";

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"%BRONOT[^%]+%").expect("marker pattern is valid"))
}

/// Decode a raw broker message into a [`TranslatedBatch`]
///
/// Records sharing a request id collapse to one entry, later record wins.
///
/// # Errors
/// - `InvalidMessageFormat` when no wire record marker is found
/// - `NonRequestNotification` for a record without the REQUEST prefix
/// - `MalformedMessage` for an unknown discriminator or too few fields
pub fn translate(raw: &str) -> Result<TranslatedBatch, RelayError> {
    let occurrences: Vec<&str> = marker_pattern()
        .find_iter(raw)
        .map(|m| m.as_str())
        .collect();
    if occurrences.is_empty() {
        return Err(RelayError::invalid_format(raw));
    }

    let mut batch = TranslatedBatch::new();
    for occurrence in occurrences {
        let (request_id, payload) = decode_record(occurrence)?;
        batch.insert(request_id, payload);
    }
    Ok(batch)
}

/// Decode one wire occurrence into `(request id, JSON payload)`
fn decode_record(occurrence: &str) -> Result<(String, String), RelayError> {
    let interior = occurrence.strip_prefix(RECORD_PREFIX).unwrap_or(occurrence);
    let interior = interior.strip_suffix(RECORD_SUFFIX).unwrap_or(interior);
    let fields: Vec<&str> = interior.split(FIELD_DELIMITER).collect();

    if fields.len() < 3 {
        return Err(RelayError::malformed("insufficient fields", occurrence));
    }

    if fields[0] != "REQUEST" {
        return Err(RelayError::NonRequestNotification {
            message: occurrence.to_string(),
        });
    }

    let discriminator = fields[2];
    debug!(discriminator, "decoding wire record");

    match discriminator {
        "REQ_UPDATED" | "REQ_ADDED" | "REQ_DELETED" => {
            if fields.len() < 10 {
                return Err(RelayError::malformed(discriminator, occurrence));
            }
            let record = RequestNotification {
                message_type: discriminator.to_string(),
                request_id: fields[3].to_string(),
                mat_id: fields[4].to_string(),
                destination: fields[5].to_string(),
                requestor_name: fields[6].to_string(),
                status: fields[7].to_string(),
                blank: fields[8].to_string(),
                hostname: fields[9].to_string(),
            };
            Ok((record.request_id.clone(), serde_json::to_string(&record)?))
        }
        "TRAN_UPDATED" => {
            if fields.len() < 9 {
                return Err(RelayError::malformed(discriminator, occurrence));
            }
            let record = TransferUpdatedNotification {
                message_type: discriminator.to_string(),
                request_id: fields[3].to_string(),
                transfer_id: fields[4].to_string(),
                source: fields[5].to_string(),
                destination: fields[6].to_string(),
                status: fields[7].to_string(),
                hostname: fields[8].to_string(),
            };
            Ok((record.request_id.clone(), serde_json::to_string(&record)?))
        }
        "TRAN_PROGRESS" => {
            if fields.len() < 8 {
                return Err(RelayError::malformed(discriminator, occurrence));
            }
            let record = TransferProgressNotification {
                message_type: discriminator.to_string(),
                request_id: fields[3].to_string(),
                transfer_id: fields[4].to_string(),
                progress: fields[5].to_string(),
                status: fields[6].to_string(),
                hostname: fields[7].to_string(),
            };
            Ok((record.request_id.clone(), serde_json::to_string(&record)?))
        }
        other => Err(RelayError::malformed(other, occurrence)),
    }
}
