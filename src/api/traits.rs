//! Trait abstraction for the submission client to enable mocking in tests

use super::{SubmissionReceipt, SubmitError};
use crate::schema::FormData;
use async_trait::async_trait;

/// Sends a validated submission to the onboarding endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Issue exactly one request carrying `data`
    async fn submit(&self, data: &FormData) -> Result<SubmissionReceipt, SubmitError>;
}
