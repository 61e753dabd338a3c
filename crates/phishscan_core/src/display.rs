//! Display port: the only way the view model reaches an output surface.

use crate::notification::{NotificationId, NotificationPhase};
use crate::render::DisplayFacts;
use crate::view_model::{AppViewModel, NotificationView};
use crate::Readiness;

/// Output surface driven by [`present`]. Implemented once per target
/// environment, plus a recording fake in tests.
pub trait DisplayPort {
    fn show_readiness(&mut self, readiness: Readiness, model_type: Option<&str>);
    /// Enables or hides the URL input; `text` is the current input value.
    fn show_input(&mut self, enabled: bool, text: &str);
    fn show_scanning(&mut self, url: &str);
    fn show_result(&mut self, facts: &DisplayFacts);
    fn clear_result(&mut self);
    fn show_notification(&mut self, notification: &NotificationView);
    fn begin_notification_exit(&mut self, id: NotificationId);
    fn remove_notification(&mut self, id: NotificationId);
}

/// Pushes the differences between two view models to the port.
///
/// With no previous view everything visible in `next` is shown.
pub fn present(previous: Option<&AppViewModel>, next: &AppViewModel, port: &mut dyn DisplayPort) {
    let blank = AppViewModel::default();
    let first_frame = previous.is_none();
    let prev = previous.unwrap_or(&blank);

    if first_frame || prev.readiness != next.readiness || prev.model_type != next.model_type {
        port.show_readiness(next.readiness, next.model_type.as_deref());
    }

    if prev.result.is_some() && next.result.is_none() {
        port.clear_result();
    }

    if first_frame || prev.input_enabled != next.input_enabled {
        port.show_input(next.input_enabled, &next.input);
    }

    if let Some(url) = next.scanning_url.as_deref() {
        if prev.scanning_url.as_deref() != Some(url) {
            port.show_scanning(url);
        }
    }

    if let Some(facts) = next.result.as_ref() {
        if prev.result.as_ref() != Some(facts) {
            port.show_result(facts);
        }
    }

    present_notifications(&prev.notifications, &next.notifications, port);
}

fn present_notifications(
    prev: &[NotificationView],
    next: &[NotificationView],
    port: &mut dyn DisplayPort,
) {
    for old in prev {
        if !next.iter().any(|item| item.id == old.id) {
            port.remove_notification(old.id);
        }
    }
    for item in next {
        match prev.iter().find(|old| old.id == item.id) {
            None => {
                port.show_notification(item);
                if item.phase == NotificationPhase::Exiting {
                    port.begin_notification_exit(item.id);
                }
            }
            Some(old) => {
                if old.phase != item.phase && item.phase == NotificationPhase::Exiting {
                    port.begin_notification_exit(item.id);
                }
            }
        }
    }
}
