// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! the notification queue and the host, and stores them in a circular buffer.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::events::{DiagnosticEvent, DiagnosticEventKind, DismissReason};
use super::report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
use super::{BufferCapacity, CircularBuffer};
use crate::ui::notifications::{NotificationId, Severity};

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone. Sends never block: events are dropped when
/// the channel is full or the collector is gone.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log(&self, kind: DiagnosticEventKind) {
        if let Err(err) = self.event_tx.try_send(DiagnosticEvent::new(kind)) {
            log::debug!("diagnostic event dropped: {:?}", err.into_inner().kind);
        }
    }

    pub fn log_notified(&self, id: NotificationId, severity: Severity) {
        self.log(DiagnosticEventKind::Notified { id, severity });
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn log_dismissed(&self, id: NotificationId, reason: DismissReason, shown: Duration) {
        self.log(DiagnosticEventKind::Dismissed {
            id,
            reason,
            shown_ms: shown.as_millis() as u64,
        });
    }

    pub fn log_stale_timer(&self, id: NotificationId) {
        self.log(DiagnosticEventKind::StaleTimer { id });
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        self.log(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    ///
    /// The event channel holds as many events as the buffer, so one drain per
    /// update loses nothing the buffer could have kept.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(capacity.value());

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Call this from the host's update loop.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_events(self.buffer.iter().map(|event| &event.kind))
    }

    /// Exports all collected events as a JSON diagnostic report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        DiagnosticReport {
            metadata: ReportMetadata::new(
                self.collection_started_at_utc,
                collection_duration_ms,
                events.len(),
            ),
            summary: self.summary(),
            events,
        }
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("buffered", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}
