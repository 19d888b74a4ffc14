//! Submission lifecycle

use crate::api::SubmissionReceipt;
use crate::schema::FormData;

/// A submission the endpoint accepted
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    /// What was sent, kept for the confirmation summary
    pub data: FormData,
    /// Whatever confirmation the endpoint returned
    pub receipt: SubmissionReceipt,
}

/// Where the form is in its submit cycle.
///
/// `Idle` and `Failure` are editable; `Submitting` and `Success` lock the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// One request carrying this payload is in flight
    Submitting(FormData),
    Success(Accepted),
    /// Last attempt failed with this user-facing message
    Failure(String),
}

impl SubmissionState {
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Idle | Self::Failure(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn accepted(&self) -> Option<&Accepted> {
        match self {
            Self::Success(accepted) => Some(accepted),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting(_) => "submitting",
            Self::Success(_) => "success",
            Self::Failure(_) => "failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle_and_editable() {
        let state = SubmissionState::default();
        assert_eq!(state, SubmissionState::Idle);
        assert!(state.is_editable());
        assert!(!state.is_submitting());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_failure_stays_editable() {
        let state = SubmissionState::Failure("server error".to_string());
        assert!(state.is_editable());
        assert_eq!(state.error_message(), Some("server error"));
        assert_eq!(state.label(), "failure");
    }
}
