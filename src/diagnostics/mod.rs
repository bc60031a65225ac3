// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the notification lifecycle.
//!
//! Events (notified, dismissed with a reason, stale timer firings, host
//! warnings) are sent through cheap [`DiagnosticsHandle`]s, stored in a
//! memory-bounded [`CircularBuffer`] by the [`DiagnosticsCollector`], and can
//! be exported as a JSON report.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, DismissReason};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
