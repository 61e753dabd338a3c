use std::time::Duration;

/// How long a notification stays fully visible.
pub const VISIBLE_FOR: Duration = Duration::from_millis(3000);
/// Length of the exit transition that follows the visible period.
pub const EXIT_FOR: Duration = Duration::from_millis(300);

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Exiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    age: Duration,
}

impl Notification {
    pub fn phase(&self) -> NotificationPhase {
        if self.age < VISIBLE_FOR {
            NotificationPhase::Visible
        } else {
            NotificationPhase::Exiting
        }
    }

    fn expired(&self) -> bool {
        self.age >= VISIBLE_FOR + EXIT_FOR
    }
}

/// Stack of independently timed notifications.
///
/// Each pushed message gets its own timer; nothing is deduplicated or queued.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationStack {
    next_id: NotificationId,
    items: Vec<Notification>,
}

impl NotificationStack {
    pub fn push(&mut self, message: impl Into<String>) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            age: Duration::ZERO,
        });
        id
    }

    /// Ages every notification and drops the ones past their exit transition.
    ///
    /// Returns true when any phase changed or a notification was removed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let mut changed = false;
        for item in &mut self.items {
            let before = item.phase();
            item.age = item.age.saturating_add(elapsed);
            changed |= item.phase() != before;
        }
        let count = self.items.len();
        self.items.retain(|item| !item.expired());
        changed || self.items.len() != count
    }

    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }
}
