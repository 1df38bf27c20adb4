//! User-facing notifications
//!
//! The side channel remote failures report through. Newest first; each
//! notification expires after its own duration.

use std::time::{Duration, Instant};

use super::Action;

/// How long error notifications stay on screen
pub const ERROR_DURATION: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    GetLabelsFailed,
    CreateLabelFailed,
    UpdateLabelFailed,
    DeleteLabelFailed,
    GetBucketsFailed,
}

impl NotificationKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::GetLabelsFailed => "Failed to get labels",
            Self::CreateLabelFailed => "Failed to create label",
            Self::UpdateLabelFailed => "Failed to update label",
            Self::DeleteLabelFailed => "Failed to delete label",
            Self::GetBucketsFailed => "Failed to get buckets",
        }
    }

    pub fn style(self) -> NotificationStyle {
        NotificationStyle::Error
    }
}

/// Every notification raised today reports a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStyle {
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Assigned when published; 0 until then
    pub id: u64,
    pub kind: NotificationKind,
    pub style: NotificationStyle,
    pub message: String,
    pub duration: Duration,
    pub published_at: Instant,
}

impl Notification {
    pub fn new(kind: NotificationKind, published_at: Instant) -> Self {
        Self {
            id: 0,
            kind,
            style: kind.style(),
            message: kind.message().to_string(),
            duration: ERROR_DURATION,
            published_at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.published_at) >= self.duration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationAction {
    Publish(Notification),
    Dismiss(u64),
    /// Drop every notification whose duration has elapsed at this instant
    Expire(Instant),
}

/// Publish a notification of `kind`, stamped now
pub fn notify(kind: NotificationKind) -> Action {
    Action::Notifications(NotificationAction::Publish(Notification::new(kind, Instant::now())))
}

pub fn dismiss(id: u64) -> Action {
    Action::Notifications(NotificationAction::Dismiss(id))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsState {
    pub list: Vec<Notification>,
    next_id: u64,
}

impl NotificationsState {
    pub fn reduce(&mut self, action: NotificationAction) {
        match action {
            NotificationAction::Publish(mut notification) => {
                self.next_id += 1;
                notification.id = self.next_id;
                self.list.insert(0, notification);
            }
            NotificationAction::Dismiss(id) => self.list.retain(|n| n.id != id),
            NotificationAction::Expire(now) => self.list.retain(|n| !n.is_expired(now)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
