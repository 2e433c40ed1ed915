// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[toasts]` - Countdown, visible window, spacing and placement of toasts
//!
//! # Path Resolution
//!
//! The config file location is resolved in this order:
//! 1. Explicit path passed to `load_from_path()`/`save_to_path()`
//! 2. CLI override (`--config-dir`) registered with [`init_cli_override`]
//! 3. `TOAST_STACK_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_stack::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toasts.duration_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::toast::{LayoutParams, StoreSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "ToastStack";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TOAST_STACK_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Viewport corner the toast stack is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Anchor {
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::TopRight)
    }

    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::BottomLeft)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast timing and stacking settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Countdown before a toast dismisses itself, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Number of newest toasts rendered opaque and interactive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_limit: Option<usize>,

    /// Gap between cards while the stack is hovered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,

    /// Spacing between older cards while the stack is collapsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed_step: Option<f32>,

    /// Scale lost per depth step while collapsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_step: Option<f32>,

    /// Height assumed for cards that have not been measured yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_height: Option<f32>,

    /// Viewport corner of the stack.
    #[serde(default)]
    pub anchor: Anchor,

    /// How often the host checks for expired toasts, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_interval_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: Some(DEFAULT_TOAST_DURATION_MS),
            visible_limit: Some(DEFAULT_VISIBLE_LIMIT),
            gap: Some(DEFAULT_STACK_GAP),
            collapsed_step: Some(DEFAULT_COLLAPSED_STEP),
            scale_step: Some(DEFAULT_SCALE_STEP),
            fallback_height: Some(DEFAULT_FALLBACK_HEIGHT),
            anchor: Anchor::default(),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl ToastConfig {
    /// Store parameters, clamped to supported bounds.
    #[must_use]
    pub fn store_settings(&self) -> StoreSettings {
        let duration_ms = self
            .duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS);
        StoreSettings {
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Layout parameters, clamped to supported bounds.
    #[must_use]
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            visible_limit: self
                .visible_limit
                .unwrap_or(DEFAULT_VISIBLE_LIMIT)
                .clamp(MIN_VISIBLE_LIMIT, MAX_VISIBLE_LIMIT),
            gap: clamp_spacing(self.gap, DEFAULT_STACK_GAP),
            collapsed_step: clamp_spacing(self.collapsed_step, DEFAULT_COLLAPSED_STEP),
            scale_step: self
                .scale_step
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_SCALE_STEP)
                .clamp(0.0, MAX_SCALE_STEP),
            fallback_height: clamp_spacing(self.fallback_height, DEFAULT_FALLBACK_HEIGHT),
        }
    }

    /// Host polling interval, clamped to supported bounds.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.tick_interval_ms
                .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        )
    }
}

fn clamp_spacing(value: Option<f32>, default: f32) -> f32 {
    value
        .filter(|v| v.is_finite())
        .unwrap_or(default)
        .clamp(0.0, MAX_SPACING)
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub toasts: ToastConfig,
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Registers the `--config-dir` CLI override.
///
/// Only the first call has an effect; later calls are ignored.
pub fn init_cli_override(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

/// Returns the config directory, honoring the CLI and environment overrides.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
#[must_use]
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }
    if let Some(path) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Never fails: missing files yield defaults silently, unreadable or invalid
/// files yield defaults plus a warning meant for the user.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = get_default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to default config");
            (Config::default(), Some(err.to_string()))
        }
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads and parses a config file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes a config file, creating parent directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(Error::from)
}
