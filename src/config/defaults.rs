// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: auto-dismiss delay and active-toast bound
//! - **Diagnostics**: event buffer size

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss delay for every toast (in milliseconds).
pub const DEFAULT_DISMISS_AFTER_MS: u64 = 3000;

/// Minimum auto-dismiss delay (in milliseconds).
pub const MIN_DISMISS_AFTER_MS: u64 = 500;

/// Maximum auto-dismiss delay (in milliseconds).
pub const MAX_DISMISS_AFTER_MS: u64 = 60_000;

/// Upper bound for `max_active` when a bound is configured.
pub const MAX_ACTIVE_LIMIT: usize = 50;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

pub use crate::diagnostics::buffer_capacity_bounds::{
    DEFAULT as DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX as MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN as MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DISMISS_AFTER_MS <= DEFAULT_DISMISS_AFTER_MS);
    assert!(DEFAULT_DISMISS_AFTER_MS <= MAX_DISMISS_AFTER_MS);
    assert!(MAX_ACTIVE_LIMIT > 0);
};
