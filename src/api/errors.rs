//! Submission error types

use thiserror::Error;

/// Shown when the request never produced an HTTP response
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status
    #[error("endpoint rejected the submission with status {status}")]
    Rejected {
        status: u16,
        /// `message` field of the error body, when it had one
        message: Option<String>,
    },

    /// DNS, connect, reset or transport-level timeout
    #[error("transport failure: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Text shown to the user above the form
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Rejected { status, .. } => format!("HTTP error! Status: {status}"),
            Self::Transport(_) => UNEXPECTED_ERROR.to_string(),
        }
    }
}
