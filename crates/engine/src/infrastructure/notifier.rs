//! Notification sink that writes to the log.
//!
//! Used by the runner, where there is no UI to show toasts in.

use crate::infrastructure::ports::{NotificationKind, NotificationPort};

pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Info | NotificationKind::Success => {
                tracing::info!(%kind, "{}", message);
            }
            NotificationKind::Error => {
                tracing::warn!(%kind, "{}", message);
            }
        }
    }
}
