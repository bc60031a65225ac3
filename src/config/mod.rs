// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Auto-dismiss delay and optional bound on active toasts
//! - `[diagnostics]` - Size of the diagnostic event buffer
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.notifications.max_active = Some(5);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::diagnostics::BufferCapacity;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    /// Auto-dismiss delay in milliseconds.
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,

    /// Maximum number of simultaneously active toasts. Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_active: Option<usize>,
}

impl NotificationsConfig {
    /// Auto-dismiss delay, clamped to the supported range.
    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(
            self.dismiss_after_ms
                .clamp(MIN_DISMISS_AFTER_MS, MAX_DISMISS_AFTER_MS),
        )
    }

    /// Active-toast bound, clamped to `1..=MAX_ACTIVE_LIMIT`.
    #[must_use]
    pub fn max_active(&self) -> Option<usize> {
        self.max_active.map(|n| n.clamp(1, MAX_ACTIVE_LIMIT))
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: DEFAULT_DISMISS_AFTER_MS,
            max_active: None,
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Number of lifecycle events kept in memory.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.buffer_capacity)
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

fn default_dismiss_after_ms() -> u64 {
    DEFAULT_DISMISS_AFTER_MS
}

fn default_buffer_capacity() -> usize {
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Load/Save Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// A missing file yields the defaults. An unreadable or invalid file also
/// yields the defaults, together with a warning the host can surface.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("falling back to default settings: {err}");
                    return (
                        Config::default(),
                        Some(format!("Settings could not be loaded: {err}")),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            notifications: NotificationsConfig {
                dismiss_after_ms: 4500,
                max_active: Some(4),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: 200,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[notifications]\nmax_active = 3\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.notifications.dismiss_after_ms, DEFAULT_DISMISS_AFTER_MS);
        assert_eq!(loaded.notifications.max_active, Some(3));
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_invalid_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[notifications\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn default_dismiss_delay_is_three_seconds() {
        let config = Config::default();
        assert_eq!(
            config.notifications.dismiss_after(),
            Duration::from_millis(3000)
        );
        assert!(config.notifications.max_active().is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let notifications = NotificationsConfig {
            dismiss_after_ms: 10,
            max_active: Some(0),
        };
        assert_eq!(
            notifications.dismiss_after(),
            Duration::from_millis(MIN_DISMISS_AFTER_MS)
        );
        assert_eq!(notifications.max_active(), Some(1));

        let notifications = NotificationsConfig {
            dismiss_after_ms: u64::MAX,
            max_active: Some(10_000),
        };
        assert_eq!(
            notifications.dismiss_after(),
            Duration::from_millis(MAX_DISMISS_AFTER_MS)
        );
        assert_eq!(notifications.max_active(), Some(MAX_ACTIVE_LIMIT));
    }
}
