use crate::notification::NotificationStack;
use crate::readiness::{HealthReport, Readiness};
use crate::render::render;
use crate::scan::{ScanId, ScanState};
use crate::view_model::{AppViewModel, NotificationView};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    input: String,
    scan: ScanState,
    readiness: Readiness,
    model_type: Option<String>,
    health_probe_started: bool,
    last_scan_id: ScanId,
    notifications: NotificationStack,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let scanning_url = match &self.scan {
            ScanState::Scanning { url, .. } => Some(url.clone()),
            _ => None,
        };
        let result = match &self.scan {
            ScanState::Result(response) => Some(render(response)),
            _ => None,
        };
        AppViewModel {
            readiness: self.readiness,
            model_type: self.model_type.clone(),
            phase: self.scan.phase(),
            input: self.input.clone(),
            input_enabled: matches!(self.scan, ScanState::Idle),
            scanning_url,
            result,
            notifications: self
                .notifications
                .iter()
                .map(|item| NotificationView {
                    id: item.id,
                    message: item.message.clone(),
                    phase: item.phase(),
                })
                .collect(),
            dirty: self.dirty,
        }
    }

    pub fn scan(&self) -> &ScanState {
        &self.scan
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn take_scan(&mut self) -> ScanState {
        std::mem::take(&mut self.scan)
    }

    pub(crate) fn replace_scan(&mut self, next: ScanState) {
        self.scan = next;
    }

    pub(crate) fn next_scan_id(&self) -> ScanId {
        self.last_scan_id + 1
    }

    pub(crate) fn commit_scan_id(&mut self, scan_id: ScanId) {
        self.last_scan_id = self.last_scan_id.max(scan_id);
    }

    /// Marks the one-shot health probe as started; false if it already ran.
    pub(crate) fn begin_health_probe(&mut self) -> bool {
        !std::mem::replace(&mut self.health_probe_started, true)
    }

    pub(crate) fn apply_health(&mut self, report: HealthReport) {
        self.readiness = report.readiness;
        self.model_type = report.model_type;
        self.mark_dirty();
    }

    pub(crate) fn notifications_mut(&mut self) -> &mut NotificationStack {
        &mut self.notifications
    }
}
