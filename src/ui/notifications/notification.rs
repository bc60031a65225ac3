// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `NotificationId` handle
//! and the `Severity` enum used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Identifiers come from a process-wide counter and are never reused, so a
/// timer that fires late can never hit a newer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Something went wrong (red).
    Error,
    /// Informational message (blue).
    Info,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Returns the glyph shown next to the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "!",
            Severity::Info => "i",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        };
        f.write_str(name)
    }
}

/// A notification to be displayed to the user.
///
/// Message and severity are fixed at creation; the only thing that happens
/// to a notification afterwards is its removal from the queue.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the default (`Success`) severity.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::default(), message)
    }

    /// Creates a new notification with an explicit severity.
    pub fn with_severity(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn ids_increase_monotonically() {
        let first = NotificationId::new();
        let second = NotificationId::new();
        assert!(second > first);
    }

    #[test]
    fn default_severity_is_success() {
        assert_eq!(Notification::new("saved").severity(), Severity::Success);
        assert_eq!(Severity::default(), Severity::Success);
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let error = Severity::Error.color();
        let info = Severity::Info.color();

        assert_ne!(success, error);
        assert_ne!(success, info);
        assert_ne!(error, info);
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::error("").severity(), Severity::Error);
        assert_eq!(Notification::info("").severity(), Severity::Info);
    }

    #[test]
    fn empty_message_is_accepted() {
        let notification = Notification::info("");
        assert!(notification.message().is_empty());
    }

    #[test]
    fn severity_serializes_as_snake_case() {
        let json = serde_json::to_string(&Severity::Error).expect("serialization should succeed");
        assert_eq!(json, "\"error\"");
    }
}
