// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! (chat saved, summary request failed, address copied) without blocking
//! interaction. Each one disappears after a fixed delay or when the user
//! dismisses it, whichever comes first.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its `NotificationId` and `Severity`
//! - [`queue`] - `Queue`, ordered storage and lifecycle of active notifications
//! - [`scheduler`] - cancellable auto-dismiss timers
//! - [`notifier`] - `Notifier`, a cloneable sender for code that does not own the queue
//! - [`toast`] - Toast widget rendering the queue
//!
//! # Usage
//!
//! ```
//! use iced_toasts::ui::notifications::{ManualScheduler, Queue, Severity};
//! use std::time::Duration;
//!
//! let mut queue = Queue::new(ManualScheduler::new());
//! let saved = queue.notify("Saved", Severity::Success);
//! queue.notify("Request failed", Severity::Error);
//!
//! queue.dismiss(saved);
//! assert_eq!(queue.len(), 1);
//!
//! queue.advance(Duration::from_millis(3000));
//! assert!(queue.is_empty());
//! ```
//!
//! An Iced host uses `Queue<TaskScheduler>` instead, returns
//! [`Queue::take_tasks`] from its `update`, routes [`NotificationMessage`]s
//! to [`Queue::handle_message`] and renders [`Toast::view_overlay`].

pub mod notification;
pub mod notifier;
pub mod queue;
pub mod scheduler;
pub mod toast;

pub use notification::{Notification, NotificationId, Severity};
pub use notifier::Notifier;
pub use queue::{Message as NotificationMessage, Queue};
pub use scheduler::{
    ManualScheduler, ManualTimer, Scheduler, TaskScheduler, TaskTimer, Timer, TokioScheduler,
    TokioTimer,
};
pub use toast::Toast;
