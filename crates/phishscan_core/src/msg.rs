use std::time::Duration;

use crate::{ClassificationResponse, ErrorOutcome, HealthReport, ScanId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Application finished setting up its display surface.
    Started,
    /// User edited the URL input.
    InputChanged(String),
    /// User submitted the current input for scanning.
    ScanSubmitted,
    /// Engine returned a classification for a scan.
    ScanSucceeded {
        scan_id: ScanId,
        response: ClassificationResponse,
    },
    /// Engine failed a scan; the outcome is already classified.
    ScanFailed {
        scan_id: ScanId,
        outcome: ErrorOutcome,
    },
    /// Startup health probe answered.
    HealthChecked(HealthReport),
    /// User clicked "Scan another".
    ResetClicked,
    /// Time elapsed since the previous tick; drives notification expiry.
    Tick(Duration),
}
