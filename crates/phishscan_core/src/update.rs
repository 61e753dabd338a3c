use scan_logging::{scan_debug, scan_info};

use crate::scan::{transition, ScanEffect, ScanEvent, ScanState};
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.begin_health_probe() {
                vec![Effect::ProbeHealth]
            } else {
                Vec::new()
            }
        }
        Msg::HealthChecked(report) => {
            scan_info!("Service readiness: {}", report.readiness.label());
            state.apply_health(report);
            Vec::new()
        }
        Msg::InputChanged(text) => {
            if matches!(state.scan(), ScanState::Idle) {
                state.set_input(text);
            }
            Vec::new()
        }
        Msg::ScanSubmitted => {
            let event = ScanEvent::Submit {
                raw: state.input().to_owned(),
                scan_id: state.next_scan_id(),
            };
            apply_scan_event(&mut state, event)
        }
        Msg::ScanSucceeded { scan_id, response } => {
            apply_scan_event(&mut state, ScanEvent::Succeeded { scan_id, response })
        }
        Msg::ScanFailed { scan_id, outcome } => {
            apply_scan_event(&mut state, ScanEvent::Failed { scan_id, outcome })
        }
        Msg::ResetClicked => {
            let was_result = matches!(state.scan(), ScanState::Result(_));
            let effects = apply_scan_event(&mut state, ScanEvent::Reset);
            if was_result {
                state.set_input(String::new());
            }
            effects
        }
        Msg::Tick(elapsed) => {
            if state.notifications_mut().advance(elapsed) {
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}

/// Runs one scan transition and routes its effects.
///
/// Notifications are owned by the state, so only requests leave the core. An
/// `Error` state is acknowledged immediately after notifying, returning the
/// controller to `Idle`.
fn apply_scan_event(state: &mut AppState, event: ScanEvent) -> Vec<Effect> {
    let before = state.take_scan();
    let before_phase = before.phase();
    let snapshot = before.clone();
    let (mut next, scan_effects) = transition(before, event);

    let mut effects = Vec::new();
    for effect in scan_effects {
        match effect {
            ScanEffect::Request { scan_id, url } => {
                state.commit_scan_id(scan_id);
                scan_info!("Submitting scan {scan_id} for {url}");
                effects.push(Effect::SubmitScan { scan_id, url });
            }
            ScanEffect::Notify(outcome) => {
                scan_info!("Scan failed ({}): {}", outcome.kind, outcome.message);
                state.notifications_mut().push(outcome.message);
                state.mark_dirty();
            }
            ScanEffect::ClearNotifications => {
                if state.notifications_mut().clear() {
                    state.mark_dirty();
                }
            }
        }
    }

    if matches!(next, ScanState::Error(_)) {
        next = transition(next, ScanEvent::Acknowledge).0;
    }

    if next != snapshot {
        scan_debug!("Scan phase {:?} -> {:?}", before_phase, next.phase());
        state.mark_dirty();
    }
    state.replace_scan(next);
    effects
}
