//! Legacy record schemas
//!
//! One struct per discriminator family. Serialized key names reproduce what
//! downstream consumers of the original system parse; fields marked
//! `#[serde(skip)]` are decoded but never emitted.

use serde::Serialize;

/// REQ_UPDATED, REQ_ADDED, REQ_DELETED
#[derive(Debug, Clone, Serialize)]
pub struct RequestNotification {
    #[serde(rename = "MessageType")]
    pub message_type: String,
    #[serde(rename = "RequestID")]
    pub request_id: String,
    #[serde(rename = "MatID")]
    pub mat_id: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(skip)]
    pub requestor_name: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(skip)]
    pub blank: String,
    #[serde(skip)]
    pub hostname: String,
}

/// TRAN_UPDATED
#[derive(Debug, Clone, Serialize)]
pub struct TransferUpdatedNotification {
    #[serde(rename = "MessageType")]
    pub message_type: String,
    #[serde(rename = "RequestID")]
    pub request_id: String,
    #[serde(rename = "TransferID")]
    pub transfer_id: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(skip)]
    pub hostname: String,
}

/// TRAN_PROGRESS
#[derive(Debug, Clone, Serialize)]
pub struct TransferProgressNotification {
    #[serde(rename = "MessageType")]
    pub message_type: String,
    #[serde(rename = "RequestID")]
    pub request_id: String,
    #[serde(rename = "TransferID")]
    pub transfer_id: String,
    #[serde(rename = "Progress")]
    pub progress: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(skip)]
    pub hostname: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_fields_excluded_from_output() {
        let record = TransferProgressNotification {
            message_type: "TRAN_PROGRESS".to_string(),
            request_id: "R1".to_string(),
            transfer_id: "T1".to_string(),
            progress: "5".to_string(),
            status: "Copying".to_string(),
            hostname: "ip-X".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""RequestID":"R1""#));
        assert!(!json.contains("ip-X"));
        assert!(!json.contains("Hostname"));
    }
}
