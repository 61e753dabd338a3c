use std::sync::{mpsc, Arc};

use phishscan_core::{Effect, ErrorOutcome, Msg};
use phishscan_engine::{
    ClientSettings, EngineError, EngineEvent, EngineHandle, EventSink, FailureKind,
    TransportError,
};
use scan_logging::{scan_info, scan_warn};

use super::app::LoopEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: &ClientSettings, tx: mpsc::Sender<LoopEvent>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink { tx }))?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ProbeHealth => {
                    scan_info!("Probing service health");
                    self.engine.probe_health();
                }
                Effect::SubmitScan { scan_id, url } => {
                    scan_info!("SubmitScan scan_id={} url_len={}", scan_id, url.len());
                    self.engine.submit(scan_id, url);
                }
            }
        }
    }
}

/// Turns engine events into core messages on the main loop channel.
struct MsgSink {
    tx: mpsc::Sender<LoopEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(LoopEvent::Msg(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::HealthChecked(report) => Msg::HealthChecked(report),
        EngineEvent::ScanCompleted { scan_id, result } => match result {
            Ok(response) => Msg::ScanSucceeded { scan_id, response },
            Err(err) => {
                scan_warn!("Scan {} failed: {}", scan_id, err);
                Msg::ScanFailed {
                    scan_id,
                    outcome: map_failure(&err),
                }
            }
        },
    }
}

/// Classifies a transport failure for the notification surface.
fn map_failure(err: &TransportError) -> ErrorOutcome {
    match err.kind {
        FailureKind::Network | FailureKind::Timeout => ErrorOutcome::network(),
        FailureKind::HttpStatus(_) => ErrorOutcome::rejected(Some(&err.message)),
        FailureKind::InvalidResponse => ErrorOutcome::rejected(None),
    }
}
