use std::fmt;
use std::time::Duration;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const NETWORK_FAILURE: &str = "We couldn't reach our servers. Check your connection and try again.";

/// Why a submission that left the browser did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("endpoint unreachable: {0}")]
    Unreachable(String),
    #[error("no response within {}s", .0.as_secs())]
    TimedOut(Duration),
    #[error("server rejected submission with status {status}: {message}")]
    Server { status: u16, message: String },
    #[error("unreadable response with status {status}: {detail}")]
    MalformedResponse { status: u16, detail: String },
}

impl SubmitError {
    pub fn reason(&self) -> FailureReason {
        match self {
            SubmitError::Unreachable(_) | SubmitError::TimedOut(_) => FailureReason::Network,
            SubmitError::Server { .. } => FailureReason::Server,
            SubmitError::MalformedResponse { .. } => FailureReason::Malformed,
        }
    }

    /// Text for the form's error banner. Malformed responses read like server errors.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Unreachable(_) | SubmitError::TimedOut(_) => NETWORK_FAILURE.to_string(),
            SubmitError::Server { message, .. } if !message.trim().is_empty() => message.clone(),
            SubmitError::Server { .. } | SubmitError::MalformedResponse { .. } => {
                GENERIC_FAILURE.to_string()
            }
        }
    }
}

/// Machine-readable category carried by `SubmissionState::Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    Validation,
    Network,
    Server,
    Malformed,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Validation => write!(f, "validation"),
            FailureReason::Network => write!(f, "network"),
            FailureReason::Server => write!(f, "server"),
            FailureReason::Malformed => write!(f, "parse"),
        }
    }
}

/// Failure of a fire-and-forget side channel. Never changes submission state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    #[error("tracker unavailable: {0}")]
    Unavailable(String),
    #[error("tracker rejected event: {0}")]
    Rejected(String),
}
