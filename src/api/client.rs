//! HTTP client for the onboarding submission endpoint

use super::errors::SubmitError;
use super::traits::SubmissionClient;
use crate::schema::FormData;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Default submission endpoint
pub const DEFAULT_ENDPOINT: &str = "https://example.com/api/onboard";

/// Confirmation returned by the endpoint on success.
///
/// Every field is optional; a success status with an unreadable body still
/// counts as accepted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubmissionReceipt {
    pub status: Option<String>,
    pub message: Option<String>,
    /// Payload echoed back by the endpoint
    pub data: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for posting submissions over HTTP
pub struct HttpSubmissionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    /// Create a client targeting `endpoint`.
    ///
    /// No request timeout is set; the transport defaults apply.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn submit(&self, data: &FormData) -> Result<SubmissionReceipt, SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "posting onboarding submission");

        let response = self
            .client
            .post(&self.endpoint)
            .json(data)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.bytes().await;

        if !status.is_success() {
            let message = match body {
                Ok(bytes) => match serde_json::from_slice::<ErrorBody>(&bytes) {
                    Ok(parsed) => parsed.message,
                    Err(e) => {
                        tracing::warn!("Failed to parse error response: {e}");
                        None
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read error response: {e}");
                    None
                }
            };
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let receipt = body
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default();
        Ok(receipt)
    }
}
