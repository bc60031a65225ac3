// SPDX-License-Identifier: MPL-2.0
//! Cloneable sender for code that does not own the queue.
//!
//! Async work (an address summary request, a chat save) receives a
//! [`Notifier`] instead of a reference to the queue. The notification gets
//! its id immediately; it enters the queue, and its auto-dismiss timer
//! starts, when the host next calls `Queue::process_pending`.

use super::notification::{Notification, NotificationId, Severity};
use crate::error::{Error, Result};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct Notifier {
    inbox: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    pub(super) fn new(inbox: mpsc::UnboundedSender<Notification>) -> Self {
        Self { inbox }
    }

    /// Sends a notification to the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QueueClosed`] when the queue has been dropped. This is
    /// a wiring bug in the host, not a runtime condition to recover from.
    pub fn push(&self, notification: Notification) -> Result<NotificationId> {
        let id = notification.id();
        self.inbox
            .send(notification)
            .map_err(|_| Error::QueueClosed)?;
        Ok(id)
    }

    /// Sends a message with the given severity.
    ///
    /// # Errors
    ///
    /// See [`Notifier::push`].
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> Result<NotificationId> {
        self.push(Notification::with_severity(severity, message))
    }

    /// # Errors
    ///
    /// See [`Notifier::push`].
    pub fn success(&self, message: impl Into<String>) -> Result<NotificationId> {
        self.notify(message, Severity::Success)
    }

    /// # Errors
    ///
    /// See [`Notifier::push`].
    pub fn error(&self, message: impl Into<String>) -> Result<NotificationId> {
        self.notify(message, Severity::Error)
    }

    /// # Errors
    ///
    /// See [`Notifier::push`].
    pub fn info(&self, message: impl Into<String>) -> Result<NotificationId> {
        self.notify(message, Severity::Info)
    }

    /// Returns whether the queue behind this notifier is gone.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inbox.is_closed()
    }
}
