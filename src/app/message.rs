// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo window.

use crate::ui::notifications::NotificationMessage;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    AddressChanged(String),
    /// Request a summary of the entered address.
    Summarize,
    SummaryFinished(String),
    SaveChat,
    ExportDiagnostics,
    ClearNotifications,
    Notification(NotificationMessage),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Auto-dismiss delay override in milliseconds (`--dismiss-ms`).
    pub dismiss_ms: Option<u64>,
    /// Active-toast bound override (`--max-active`).
    pub max_active: Option<usize>,
}
