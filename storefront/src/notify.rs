//! Notification surface
//!
//! Fire-and-forget transient messages (toasts). The storefront only ever
//! calls [`Notifier::notify`]; rendering is someone else's job.

use std::sync::Arc;

use serde::Serialize;

/// Kind of transient message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Loading,
}

/// A message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Sink for user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, kind: NotificationKind, message: &str) {
        (**self).notify(kind, message)
    }
}

/// Notifier that writes every notification to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Error => tracing::error!(target: "notify", "{message}"),
            NotificationKind::Success => tracing::info!(target: "notify", "{message}"),
            NotificationKind::Loading => tracing::info!(target: "notify", "{message}..."),
        }
    }
}
