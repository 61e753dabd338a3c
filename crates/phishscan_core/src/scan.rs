use scan_logging::scan_debug;

use crate::response::ClassificationResponse;
use crate::validate::validate_input;
use crate::ErrorOutcome;

pub type ScanId = u64;

/// Lifecycle of a single scan attempt. Replaced on every transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning {
        scan_id: ScanId,
        url: String,
    },
    Result(Box<ClassificationResponse>),
    Error(String),
}

impl ScanState {
    pub fn phase(&self) -> ScanPhase {
        match self {
            ScanState::Idle => ScanPhase::Idle,
            ScanState::Scanning { .. } => ScanPhase::Scanning,
            ScanState::Result(_) => ScanPhase::Result,
            ScanState::Error(_) => ScanPhase::Error,
        }
    }

    pub fn in_flight(&self) -> Option<ScanId> {
        match self {
            ScanState::Scanning { scan_id, .. } => Some(*scan_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning,
    Result,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    /// User asked to scan the raw input; `scan_id` is used if a request is issued.
    Submit { raw: String, scan_id: ScanId },
    Succeeded {
        scan_id: ScanId,
        response: ClassificationResponse,
    },
    Failed {
        scan_id: ScanId,
        outcome: ErrorOutcome,
    },
    /// The failure has been handed to the notification surface.
    Acknowledge,
    /// User dismissed the result to scan another address.
    Reset,
}

/// Side effects requested by a scan transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEffect {
    Request { scan_id: ScanId, url: String },
    Notify(ErrorOutcome),
    ClearNotifications,
}

/// Pure scan lifecycle transition.
///
/// Events that do not apply to the current state leave it untouched and
/// produce no effects; in particular a second submit while scanning is dropped.
pub fn transition(state: ScanState, event: ScanEvent) -> (ScanState, Vec<ScanEffect>) {
    match (state, event) {
        (ScanState::Idle, ScanEvent::Submit { raw, scan_id }) => match validate_input(&raw) {
            Ok(url) => (
                ScanState::Scanning {
                    scan_id,
                    url: url.clone(),
                },
                vec![ScanEffect::Request { scan_id, url }],
            ),
            Err(outcome) => (
                ScanState::Error(outcome.message.clone()),
                vec![ScanEffect::Notify(outcome)],
            ),
        },
        (
            ScanState::Scanning { scan_id, url },
            ScanEvent::Succeeded {
                scan_id: done_id,
                response,
            },
        ) => {
            if scan_id == done_id {
                (ScanState::Result(Box::new(response)), Vec::new())
            } else {
                scan_debug!("Ignoring result for stale scan {done_id} (in flight: {scan_id})");
                (ScanState::Scanning { scan_id, url }, Vec::new())
            }
        }
        (
            ScanState::Scanning { scan_id, url },
            ScanEvent::Failed {
                scan_id: done_id,
                outcome,
            },
        ) => {
            if scan_id == done_id {
                (
                    ScanState::Error(outcome.message.clone()),
                    vec![ScanEffect::Notify(outcome)],
                )
            } else {
                scan_debug!("Ignoring failure for stale scan {done_id} (in flight: {scan_id})");
                (ScanState::Scanning { scan_id, url }, Vec::new())
            }
        }
        (ScanState::Error(_), ScanEvent::Acknowledge) => (ScanState::Idle, Vec::new()),
        (ScanState::Result(_), ScanEvent::Reset) => {
            (ScanState::Idle, vec![ScanEffect::ClearNotifications])
        }
        (state, event) => {
            scan_debug!("Scan event {:?} ignored in phase {:?}", event, state.phase());
            (state, Vec::new())
        }
    }
}
