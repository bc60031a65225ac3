// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the notification lifecycle.
//!
//! Message text is never recorded: toasts may echo wallet addresses or other
//! user input, and the lifecycle is fully described by id and severity.

use crate::ui::notifications::{NotificationId, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// How a notification left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// The user pressed the dismiss affordance.
    User,
    /// The auto-dismiss timer fired.
    Expired,
    /// The queue was full and this was the oldest entry.
    Evicted,
    /// The queue was cleared or torn down.
    Cleared,
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A notification entered the queue.
    Notified {
        id: NotificationId,
        severity: Severity,
    },
    /// A notification left the queue.
    Dismissed {
        id: NotificationId,
        reason: DismissReason,
        /// How long it was on screen.
        shown_ms: u64,
    },
    /// A timer fired for an id that had already left the queue.
    StaleTimer { id: NotificationId },
    /// Free-form warning from the host (config fallback, etc.).
    Warning { message: String },
}

/// A single diagnostic event with its timestamps.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// When the event occurred (wall clock, for reports)
    pub recorded_at: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            recorded_at: Utc::now(),
            kind,
        }
    }
}
