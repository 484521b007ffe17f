//! HttpPublishClient - default vendor client
//!
//! Publishes by POSTing the payload to the destination target URL. The
//! bearer token comes from the ambient environment (`PUSH_RELAY_TOKEN`); a
//! group key travels in the `x-message-group-id` header. Batch-style
//! destinations report per-entry failures in the JSON response body.

use contracts::{FailedEntry, PublishClient, PublishReceipt, RelayError};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::TOKEN_ENV_VAR;

const GROUP_KEY_HEADER: &str = "x-message-group-id";

/// Response body of the publish gateway
#[derive(Debug, Default, Deserialize)]
struct GatewayResponse {
    #[serde(default)]
    message_id: String,
    #[serde(default)]
    failed: Vec<GatewayFailedEntry>,
}

#[derive(Debug, Deserialize)]
struct GatewayFailedEntry {
    code: Option<String>,
    message: Option<String>,
}

/// Default publish client over HTTP
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpPublishClient {
    http: reqwest::Client,
    token: Option<String>,
}

impl HttpPublishClient {
    /// Create a client with an explicit credential
    pub fn new(token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token,
        }
    }

    /// Create a client bound to ambient environment credentials
    pub fn from_env() -> Self {
        Self::new(std::env::var(TOKEN_ENV_VAR).ok())
    }
}

impl PublishClient for HttpPublishClient {
    #[instrument(
        name = "http_publish_one",
        skip(self, payload),
        fields(target = %target, has_group_key = group_key.is_some())
    )]
    async fn publish_one(
        &self,
        target: &str,
        payload: &str,
        group_key: Option<&str>,
    ) -> Result<PublishReceipt, RelayError> {
        let mut request = self
            .http
            .post(target)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload.to_string());

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(key) = group_key {
            request = request.header(GROUP_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RelayError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::transport(format!(
                "destination returned {status}: {body}"
            )));
        }

        // Destinations without batch semantics return an empty or
        // non-JSON body; treat that as an accepted publish.
        let gateway: GatewayResponse = response.json().await.unwrap_or_default();
        debug!(message_id = %gateway.message_id, "publish accepted");

        Ok(PublishReceipt {
            message_id: gateway.message_id,
            failed: gateway
                .failed
                .into_iter()
                .map(|entry| FailedEntry {
                    code: entry.code,
                    message: entry.message,
                })
                .collect(),
        })
    }
}
