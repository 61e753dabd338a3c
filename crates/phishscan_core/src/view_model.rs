use crate::notification::{NotificationId, NotificationPhase};
use crate::render::DisplayFacts;
use crate::{Readiness, ScanPhase};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub readiness: Readiness,
    pub model_type: Option<String>,
    pub phase: ScanPhase,
    pub input: String,
    /// The input surface accepts edits and submits only while idle.
    pub input_enabled: bool,
    pub scanning_url: Option<String>,
    pub result: Option<DisplayFacts>,
    pub notifications: Vec<NotificationView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub message: String,
    pub phase: NotificationPhase,
}
