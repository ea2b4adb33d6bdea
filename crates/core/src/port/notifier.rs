// Notifier Port - toast-style callbacks from the models to the view layer

use crate::domain::Notification;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Fire-and-forget notification sink (no acknowledgement channel)
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        info!(
            kind = ?notification.kind,
            title = %notification.title,
            description = %notification.description,
            "Notification"
        );
    }
}

/// Forwards notifications to an unbounded channel (consumed by the view layer)
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new(tx: mpsc::UnboundedSender<Notification>) -> Self {
        Self { tx }
    }

    /// Notifier plus the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            // Receiver gone; delivery is best-effort
            debug!("Notification dropped: receiver closed");
        }
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::NotificationKind;
    use std::sync::Mutex;

    /// Records every notification in order
    #[derive(Default)]
    pub struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        pub fn all(&self) -> Vec<Notification> {
            self.seen.lock().unwrap().clone()
        }

        pub fn kinds(&self) -> Vec<NotificationKind> {
            self.seen.lock().unwrap().iter().map(|n| n.kind).collect()
        }

        pub fn count(&self, kind: NotificationKind) -> usize {
            self.seen
                .lock()
                .unwrap()
                .iter()
                .filter(|n| n.kind == kind)
                .count()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }
}
