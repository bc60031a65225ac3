// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a transient notification queue for Iced applications.
//!
//! Notifications appear in arrival order, disappear on their own after a
//! configurable delay (3 seconds by default) and can be dismissed early by the
//! user. Every auto-dismiss timer is cancelled when its notification leaves
//! the queue, so a late timer never removes anything.
//!
//! The crate also ships a small demo window (`src/main.rs`) that exercises
//! the queue from both the update loop and background tasks.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;
