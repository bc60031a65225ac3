// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Queue` holds the active notifications in arrival order and owns one
//! auto-dismiss timer per entry. An entry leaves the queue exactly once:
//! when its timer fires, when the user dismisses it, when a bounded queue
//! evicts it, or when the queue is cleared. Every path except the timer
//! firing cancels the timer.

use super::notification::{Notification, NotificationId, Severity};
use super::notifier::Notifier;
use super::scheduler::{ManualScheduler, Scheduler, TaskScheduler, Timer, TokioScheduler};
use crate::config::{NotificationsConfig, DEFAULT_DISMISS_AFTER_MS};
use crate::diagnostics::{DiagnosticsHandle, DismissReason};
use iced::Task;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user dismissed a notification.
    Dismiss(NotificationId),
    /// The auto-dismiss timer of a notification fired.
    Expired(NotificationId),
}

/// Ordered set of active notifications with their pending timers.
pub struct Queue<S: Scheduler> {
    /// Active notifications, oldest first.
    active: VecDeque<Notification>,
    /// One pending timer per active notification.
    timers: HashMap<NotificationId, S::Timer>,
    scheduler: S,
    dismiss_after: Duration,
    capacity: Option<usize>,
    inbox_tx: mpsc::UnboundedSender<Notification>,
    inbox_rx: mpsc::UnboundedReceiver<Notification>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: Scheduler> Queue<S> {
    /// Creates an empty, unbounded queue with the default 3 s auto-dismiss.
    pub fn new(scheduler: S) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Self {
            active: VecDeque::new(),
            timers: HashMap::new(),
            scheduler,
            dismiss_after: Duration::from_millis(DEFAULT_DISMISS_AFTER_MS),
            capacity: None,
            inbox_tx,
            inbox_rx,
            diagnostics: None,
        }
    }

    /// Creates a queue configured from the `[notifications]` settings.
    pub fn from_config(scheduler: S, config: &NotificationsConfig) -> Self {
        Self::new(scheduler)
            .with_dismiss_after(config.dismiss_after())
            .with_capacity(config.max_active())
    }

    /// Sets the auto-dismiss delay for notifications pushed from now on.
    #[must_use]
    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    /// Bounds the number of active notifications. When full, pushing evicts
    /// the oldest entry. A bound of zero is raised to one.
    #[must_use]
    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity.map(|n| n.max(1));
        self
    }

    /// Sets the diagnostics handle for recording lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Returns a sender that enqueues into this queue from anywhere.
    #[must_use]
    pub fn notifier(&self) -> Notifier {
        Notifier::new(self.inbox_tx.clone())
    }

    /// Appends a message with the given severity. Returns its id, which is the
    /// handle for early dismissal.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.push(Notification::with_severity(severity, message))
    }

    /// Appends a notification and starts its auto-dismiss timer.
    ///
    /// Pushing a notification whose id is already active changes nothing.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();
        if self.timers.contains_key(&id) {
            log::debug!("notification {id} is already active");
            return id;
        }

        if let Some(capacity) = self.capacity {
            while self.active.len() >= capacity {
                let Some(oldest) = self.active.front().map(Notification::id) else {
                    break;
                };
                self.remove(oldest, DismissReason::Evicted);
            }
        }

        let timer = self.scheduler.schedule(id, self.dismiss_after);
        self.timers.insert(id, timer);

        if let Some(handle) = &self.diagnostics {
            handle.log_notified(id, notification.severity());
        }
        log::trace!("notification {id} ({}) queued", notification.severity());

        self.active.push_back(notification);
        id
    }

    /// Dismisses a notification by its ID and cancels its timer.
    ///
    /// Returns `true` if the notification was found and removed. Unknown or
    /// already removed ids are ignored. Ids handed out by a [`Notifier`] can
    /// be dismissed before [`Queue::process_pending`] has delivered them.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.process_pending();
        self.remove(id, DismissReason::User)
    }

    /// Applies a fired auto-dismiss timer.
    ///
    /// Returns `true` if the notification was still active. A firing for an
    /// id that already left the queue removes nothing.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        if self.timers.remove(&id).is_none() {
            if let Some(handle) = &self.diagnostics {
                handle.log_stale_timer(id);
            }
            log::trace!("stale timer for notification {id}");
            return false;
        }
        self.take(id, DismissReason::Expired);
        true
    }

    /// Handles a notification message.
    ///
    /// Returns `true` if a notification was removed.
    pub fn handle_message(&mut self, message: &Message) -> bool {
        match *message {
            Message::Dismiss(id) => self.dismiss(id),
            Message::Expired(id) => self.expire(id),
        }
    }

    /// Moves notifications sent through [`Notifier`]s into the queue.
    ///
    /// Returns the number of notifications added.
    pub fn process_pending(&mut self) -> usize {
        let mut added = 0;
        while let Ok(notification) = self.inbox_rx.try_recv() {
            self.push(notification);
            added += 1;
        }
        added
    }

    /// Removes every notification and cancels every timer.
    pub fn clear(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.cancel();
        }
        for notification in self.active.drain(..) {
            if let Some(handle) = &self.diagnostics {
                handle.log_dismissed(
                    notification.id(),
                    DismissReason::Cleared,
                    notification.age(),
                );
            }
        }
    }

    /// Returns the active notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.timers.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of timers still pending. Always equal to [`Queue::len`].
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn remove(&mut self, id: NotificationId, reason: DismissReason) -> bool {
        let Some(timer) = self.timers.remove(&id) else {
            return false;
        };
        timer.cancel();
        self.take(id, reason);
        true
    }

    fn take(&mut self, id: NotificationId, reason: DismissReason) {
        let Some(pos) = self.active.iter().position(|n| n.id() == id) else {
            return;
        };
        if let Some(notification) = self.active.remove(pos) {
            if let Some(handle) = &self.diagnostics {
                handle.log_dismissed(id, reason, notification.age());
            }
            log::trace!("notification {id} removed ({reason:?})");
        }
    }
}

impl<S: Scheduler> Drop for Queue<S> {
    fn drop(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.cancel();
        }
    }
}

impl<S: Scheduler> fmt::Debug for Queue<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("active", &self.active)
            .field("dismiss_after", &self.dismiss_after)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl Queue<TaskScheduler> {
    /// Returns the timer tasks scheduled since the last call.
    ///
    /// The host returns this from its `update` so the runtime drives the
    /// timers; each resolves to [`Message::Expired`].
    pub fn take_tasks(&mut self) -> Task<Message> {
        self.scheduler.take_tasks().map(Message::Expired)
    }
}

impl Default for Queue<TaskScheduler> {
    fn default() -> Self {
        Self::new(TaskScheduler::new())
    }
}

impl Queue<TokioScheduler> {
    /// Applies every timer that has fired so far, without waiting.
    ///
    /// Returns the ids that were removed.
    pub fn process_expired(&mut self) -> Vec<NotificationId> {
        let mut removed = Vec::new();
        while let Some(id) = self.scheduler.try_next() {
            if self.expire(id) {
                removed.push(id);
            }
        }
        removed
    }

    /// Waits until a timer fires for an active notification, removes it and
    /// returns its id.
    pub async fn next_expired(&mut self) -> Option<NotificationId> {
        loop {
            let id = self.scheduler.next().await?;
            if self.expire(id) {
                return Some(id);
            }
        }
    }
}

impl Queue<ManualScheduler> {
    /// Advances the virtual clock and applies the timers that fired.
    ///
    /// Returns the ids that were removed, in firing order.
    pub fn advance(&mut self, by: Duration) -> Vec<NotificationId> {
        let fired = self.scheduler.advance(by);
        fired.into_iter().filter(|id| self.expire(*id)).collect()
    }
}
