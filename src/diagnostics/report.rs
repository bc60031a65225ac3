// SPDX-License-Identifier: MPL-2.0
//! Serializable diagnostic report.

use super::events::{DiagnosticEventKind, DismissReason};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

/// Report header.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// When the report was generated (ISO 8601)
    pub generated_at: String,
    /// Version of `iced_toasts` that generated the report
    pub version: String,
    /// When diagnostic collection started (ISO 8601)
    pub collection_started_at: String,
    /// Duration of collection in milliseconds
    pub collection_duration_ms: u64,
    /// Total number of events in the report
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// Aggregated counters over the buffered events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub notified: usize,
    pub dismissed_by_user: usize,
    pub expired: usize,
    pub evicted: usize,
    pub cleared: usize,
    pub stale_timers: usize,
    pub warnings: usize,
}

impl ReportSummary {
    pub fn from_events<'a>(events: impl Iterator<Item = &'a DiagnosticEventKind>) -> Self {
        let mut summary = Self::default();
        for kind in events {
            match kind {
                DiagnosticEventKind::Notified { .. } => summary.notified += 1,
                DiagnosticEventKind::Dismissed { reason, .. } => match reason {
                    DismissReason::User => summary.dismissed_by_user += 1,
                    DismissReason::Expired => summary.expired += 1,
                    DismissReason::Evicted => summary.evicted += 1,
                    DismissReason::Cleared => summary.cleared += 1,
                },
                DiagnosticEventKind::StaleTimer { .. } => summary.stale_timers += 1,
                DiagnosticEventKind::Warning { .. } => summary.warnings += 1,
            }
        }
        summary
    }
}

/// An event with a timestamp relative to collection start.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;

        Self { timestamp_ms, kind }
    }
}

/// Complete exported report.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{NotificationId, Severity};

    #[test]
    fn summary_counts_each_reason() {
        let id = NotificationId::new();
        let events = [
            DiagnosticEventKind::Notified {
                id,
                severity: Severity::Success,
            },
            DiagnosticEventKind::Dismissed {
                id,
                reason: DismissReason::User,
                shown_ms: 10,
            },
            DiagnosticEventKind::Dismissed {
                id,
                reason: DismissReason::Expired,
                shown_ms: 3000,
            },
            DiagnosticEventKind::StaleTimer { id },
        ];

        let summary = ReportSummary::from_events(events.iter());
        assert_eq!(summary.notified, 1);
        assert_eq!(summary.dismissed_by_user, 1);
        assert_eq!(summary.expired, 1);
        assert_eq!(summary.stale_timers, 1);
        assert_eq!(summary.evicted, 0);
    }

    #[test]
    fn event_timestamp_before_start_saturates() {
        let later = Instant::now();
        let earlier = later
            .checked_sub(std::time::Duration::from_millis(5))
            .unwrap_or(later);
        let event = SerializableEvent::new(
            earlier,
            later,
            DiagnosticEventKind::Warning {
                message: "x".into(),
            },
        );
        assert_eq!(event.timestamp_ms, 0);
    }
}
