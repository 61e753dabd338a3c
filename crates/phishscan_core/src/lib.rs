//! PhishScan core: pure scan state machine, result renderer and view-model helpers.
mod display;
mod effect;
mod error;
mod msg;
mod notification;
mod readiness;
mod render;
mod response;
mod scan;
mod state;
mod update;
mod validate;
mod view_model;

pub use display::{present, DisplayPort};
pub use effect::Effect;
pub use error::{
    ErrorKind, ErrorOutcome, EMPTY_INPUT_MESSAGE, NETWORK_FAILURE_MESSAGE,
    SERVICE_FAILURE_MESSAGE,
};
pub use msg::Msg;
pub use notification::{
    Notification, NotificationId, NotificationPhase, NotificationStack, EXIT_FOR, VISIBLE_FOR,
};
pub use readiness::{HealthReport, Readiness};
pub use render::{
    capitalize_first, format_percent, render, DisplayFacts, FactRow, NetworkSection,
    RiskSeverity, Verdict, NETWORK_RISK_MAX, NETWORK_RISK_THRESHOLD, UNKNOWN, YOUNG_DOMAIN_DAYS,
};
pub use response::{
    ClassConfidence, ClassificationResponse, HealthBody, NetworkAnalysis, ServiceErrorBody,
    UrlFeatures,
};
pub use scan::{transition, ScanEffect, ScanEvent, ScanId, ScanPhase, ScanState};
pub use state::AppState;
pub use update::update;
pub use validate::validate_input;
pub use view_model::{AppViewModel, NotificationView};
