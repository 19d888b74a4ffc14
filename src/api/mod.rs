//! Submission client module for HTTP communication

mod client;
mod errors;
mod traits;

pub use client::{HttpSubmissionClient, SubmissionReceipt, DEFAULT_ENDPOINT};
pub use errors::SubmitError;
pub use traits::SubmissionClient;

#[cfg(test)]
pub use traits::MockSubmissionClient;
