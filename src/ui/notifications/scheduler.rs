// SPDX-License-Identifier: MPL-2.0
//! Cancellable auto-dismiss timers.
//!
//! The queue never sleeps itself. It asks a [`Scheduler`] for one [`Timer`]
//! per notification and is told later, through [`Queue::expire`], that the
//! timer fired. Cancelling the timer guarantees that report never arrives.
//!
//! Three schedulers are provided:
//!
//! - [`TaskScheduler`] - abortable `iced::Task`s, for hosts running an Iced
//!   application loop
//! - [`TokioScheduler`] - spawned tokio tasks reporting on a channel, for
//!   headless hosts
//! - [`ManualScheduler`] - a virtual clock advanced by hand, for tests
//!
//! [`Queue::expire`]: super::Queue::expire

use super::notification::NotificationId;
use iced::Task;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::mpsc;

/// A pending auto-dismiss callback.
pub trait Timer {
    /// Cancels the callback. A cancelled timer never reports its id.
    fn cancel(self);
}

/// Source of auto-dismiss timers.
pub trait Scheduler {
    type Timer: Timer;

    /// Schedules a report for `id` once `after` has elapsed.
    fn schedule(&mut self, id: NotificationId, after: Duration) -> Self::Timer;
}

// =============================================================================
// Iced tasks
// =============================================================================

/// Schedules timers as abortable `iced::Task`s.
///
/// Scheduled tasks accumulate until the host collects them with
/// [`TaskScheduler::take_tasks`] and returns them from its `update`.
#[derive(Default)]
pub struct TaskScheduler {
    pending: Vec<Task<NotificationId>>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every task scheduled since the last call, batched.
    pub fn take_tasks(&mut self) -> Task<NotificationId> {
        Task::batch(std::mem::take(&mut self.pending))
    }

    /// Number of tasks not yet handed to the runtime.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.pending.len()
    }
}

impl fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("pending", &self.pending.len())
            .finish()
    }
}

/// Abort handle of a scheduled `iced::Task`.
pub struct TaskTimer(iced::task::Handle);

impl Timer for TaskTimer {
    fn cancel(self) {
        self.0.abort();
    }
}

impl Scheduler for TaskScheduler {
    type Timer = TaskTimer;

    fn schedule(&mut self, id: NotificationId, after: Duration) -> TaskTimer {
        // The sleep is created lazily so scheduling works outside the executor.
        let sleep = async move { tokio::time::sleep(after).await };
        let (task, handle) = Task::perform(sleep, move |()| id).abortable();
        self.pending.push(task);
        TaskTimer(handle)
    }
}

// =============================================================================
// Tokio tasks
// =============================================================================

/// Schedules timers as spawned tokio tasks.
///
/// Fired ids arrive on an internal channel drained by
/// `Queue::<TokioScheduler>::process_expired` or awaited with
/// `Queue::<TokioScheduler>::next_expired`.
///
/// # Panics
///
/// Scheduling outside a tokio runtime panics, like `tokio::spawn`.
#[derive(Debug)]
pub struct TokioScheduler {
    expired_tx: mpsc::UnboundedSender<NotificationId>,
    expired_rx: mpsc::UnboundedReceiver<NotificationId>,
}

impl TokioScheduler {
    #[must_use]
    pub fn new() -> Self {
        let (expired_tx, expired_rx) = mpsc::unbounded_channel();
        Self {
            expired_tx,
            expired_rx,
        }
    }

    /// Returns the next fired id without waiting.
    pub fn try_next(&mut self) -> Option<NotificationId> {
        self.expired_rx.try_recv().ok()
    }

    /// Waits for the next fired id.
    pub async fn next(&mut self) -> Option<NotificationId> {
        self.expired_rx.recv().await
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Join handle of a spawned sleep.
#[derive(Debug)]
pub struct TokioTimer(tokio::task::JoinHandle<()>);

impl Timer for TokioTimer {
    fn cancel(self) {
        self.0.abort();
    }
}

impl Scheduler for TokioScheduler {
    type Timer = TokioTimer;

    fn schedule(&mut self, id: NotificationId, after: Duration) -> TokioTimer {
        let expired_tx = self.expired_tx.clone();
        TokioTimer(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // The receiver lives in the scheduler; a send error means the queue is gone.
            let _ = expired_tx.send(id);
        }))
    }
}

// =============================================================================
// Manual clock
// =============================================================================

#[derive(Debug)]
struct ManualEntry {
    deadline: Duration,
    id: NotificationId,
    cancelled: Rc<Cell<bool>>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Time starts at zero and only moves when advanced.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    entries: Vec<ManualEntry>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that are neither fired nor cancelled.
    #[must_use]
    pub fn scheduled(&self) -> usize {
        self.entries.iter().filter(|e| !e.cancelled.get()).count()
    }

    /// Moves the clock forward and returns the ids whose timers fired,
    /// ordered by deadline.
    pub fn advance(&mut self, by: Duration) -> Vec<NotificationId> {
        self.now += by;
        let now = self.now;

        let (due, waiting): (Vec<_>, Vec<_>) = self
            .entries
            .drain(..)
            .partition(|entry| entry.deadline <= now);
        self.entries = waiting;

        let mut fired: Vec<_> = due
            .into_iter()
            .filter(|entry| !entry.cancelled.get())
            .collect();
        fired.sort_by_key(|entry| (entry.deadline, entry.id));
        fired.into_iter().map(|entry| entry.id).collect()
    }
}

/// Cancellation flag shared with a [`ManualScheduler`] entry.
#[derive(Debug)]
pub struct ManualTimer {
    cancelled: Rc<Cell<bool>>,
}

impl Timer for ManualTimer {
    fn cancel(self) {
        self.cancelled.set(true);
    }
}

impl Scheduler for ManualScheduler {
    type Timer = ManualTimer;

    fn schedule(&mut self, id: NotificationId, after: Duration) -> ManualTimer {
        self.entries.retain(|entry| !entry.cancelled.get());
        let cancelled = Rc::new(Cell::new(false));
        self.entries.push(ManualEntry {
            deadline: self.now + after,
            id,
            cancelled: Rc::clone(&cancelled),
        });
        ManualTimer { cancelled }
    }
}
