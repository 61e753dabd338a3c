use std::fmt;

use phishscan_core::{ClassificationResponse, HealthReport, ScanId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    HealthChecked(HealthReport),
    ScanCompleted {
        scan_id: ScanId,
        result: Result<ClassificationResponse, TransportError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: FailureKind,
    pub message: String,
}

impl TransportError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// True when the service never answered.
    pub fn is_transport_level(&self) -> bool {
        matches!(self.kind, FailureKind::Network | FailureKind::Timeout)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection refused, DNS failure or any other missing response.
    Network,
    Timeout,
    /// The service answered with a non-success status.
    HttpStatus(u16),
    /// A success status with a body that is not a classification.
    InvalidResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid service base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    Client(String),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
