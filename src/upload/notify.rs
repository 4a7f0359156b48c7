//! Toast notifications emitted by upload actions.
//!
//! The store only knows the [`Notifier`] trait; the running app plugs in a
//! channel forwarder whose receiver the UI drains every frame.

use std::time::Duration;

use tokio::sync::mpsc;

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// How long a toast of this kind stays on screen
    pub fn default_duration(&self) -> Duration {
        match self {
            NotificationKind::Info => Duration::from_secs(3),
            NotificationKind::Success => Duration::from_secs(3),
            NotificationKind::Error => Duration::from_secs(4),
        }
    }
}

/// One user-facing message with its display duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            duration,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_kind(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_kind(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_kind(message, NotificationKind::Error)
    }

    fn with_kind(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self::new(message, kind, kind.default_duration())
    }
}

/// Sink for notifications; store actions never talk to the UI directly
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Forwards notifications to the UI over an unbounded channel
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

/// Builds the production notifier plus the receiver the UI polls
pub fn channel() -> (ChannelNotifier, mpsc::UnboundedReceiver<Notification>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelNotifier { tx }, rx)
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // send fails only once the UI side is gone
        let _ = self.tx.send(notification);
    }
}
