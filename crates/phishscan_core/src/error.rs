use std::fmt;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL";
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Failed to scan URL. Please ensure the backend is running.";
pub const SERVICE_FAILURE_MESSAGE: &str = "Prediction failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input rejected before any request was issued.
    Validation,
    /// No response was received from the service.
    Network,
    /// The service answered with a non-success status.
    ServiceRejected,
}

/// A failed scan attempt, consumed once by the notification surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorOutcome {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorOutcome {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation() -> Self {
        Self::new(ErrorKind::Validation, EMPTY_INPUT_MESSAGE)
    }

    pub fn network() -> Self {
        Self::new(ErrorKind::Network, NETWORK_FAILURE_MESSAGE)
    }

    /// Service rejection carrying the service's own message when it sent one.
    pub fn rejected(service_message: Option<&str>) -> Self {
        let message = service_message
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or(SERVICE_FAILURE_MESSAGE);
        Self::new(ErrorKind::ServiceRejected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Network => write!(f, "network"),
            ErrorKind::ServiceRejected => write!(f, "service rejected"),
        }
    }
}

impl fmt::Display for ErrorOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
