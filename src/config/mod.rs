// SPDX-License-Identifier: MPL-2.0
//! Toast configuration: the resolved [`ToastConfig`], the [`PartialConfig`]
//! used for defaults and per-call overrides, and loading/saving of the
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Default toast options, any subset of [`PartialConfig`]
//! - `[animation]` - Exit transition length and host tick interval
//!
//! ```toml
//! [toast]
//! close-duration-ms = 5000
//! position = "bottom-center"
//! limit = 3
//!
//! [animation]
//! exit-transition-ms = 250
//! ```
//!
//! # Path Resolution
//!
//! See [`paths`]: explicit override, `--config-dir`, `ICED_TOAST_CONFIG_DIR`,
//! then the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Position};
//!
//! let (mut config, _warning) = config::load();
//! config.toast.position = Some(Position::BottomLeft);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the settings file cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Position
// =============================================================================

/// Corner or edge of the host surface the toast stack is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Kebab-case name, as used in the settings file and class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }
}

impl Default for Position {
    fn default() -> Self {
        DEFAULT_POSITION
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| format!("invalid position: {}", s))
    }
}

// =============================================================================
// Resolved and partial toast configuration
// =============================================================================

/// Fully resolved options for one toast.
///
/// Built by merging the manager defaults with call-site overrides; every
/// field is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    /// Countdown length in milliseconds.
    pub close_duration_ms: u64,
    /// Whether a countdown runs at all.
    pub auto_close: bool,
    /// Where the whole stack is anchored.
    pub position: Position,
    /// Maximum number of live toasts; `0` means unlimited.
    pub limit: usize,
    pub pause_on_hover: bool,
    pub close_on_click: bool,
    pub hide_progress_bar: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            close_duration_ms: DEFAULT_CLOSE_DURATION_MS,
            auto_close: DEFAULT_AUTO_CLOSE,
            position: DEFAULT_POSITION,
            limit: DEFAULT_LIMIT,
            pause_on_hover: DEFAULT_PAUSE_ON_HOVER,
            close_on_click: DEFAULT_CLOSE_ON_CLICK,
            hide_progress_bar: DEFAULT_HIDE_PROGRESS_BAR,
        }
    }
}

impl ToastConfig {
    /// Returns a copy of `self` with every field set in `overrides` replaced.
    #[must_use]
    pub fn merged(&self, overrides: &PartialConfig) -> Self {
        let mut resolved = *self;
        resolved.apply(overrides);
        resolved
    }

    /// Overwrites the fields set in `overrides` in place.
    pub fn apply(&mut self, overrides: &PartialConfig) {
        if let Some(value) = overrides.close_duration_ms {
            self.close_duration_ms = value;
        }
        if let Some(value) = overrides.auto_close {
            self.auto_close = value;
        }
        if let Some(value) = overrides.position {
            self.position = value;
        }
        if let Some(value) = overrides.limit {
            self.limit = value;
        }
        if let Some(value) = overrides.pause_on_hover {
            self.pause_on_hover = value;
        }
        if let Some(value) = overrides.close_on_click {
            self.close_on_click = value;
        }
        if let Some(value) = overrides.hide_progress_bar {
            self.hide_progress_bar = value;
        }
    }

    #[must_use]
    pub fn close_duration(&self) -> Duration {
        Duration::from_millis(self.close_duration_ms)
    }

    /// Whether another toast may be added to a surface holding `live` toasts.
    #[must_use]
    pub fn admits(&self, live: usize) -> bool {
        self.limit == 0 || live < self.limit
    }

    /// Whether the toast gets a progress bar.
    #[must_use]
    pub fn shows_progress_bar(&self) -> bool {
        self.auto_close && !self.hide_progress_bar
    }
}

/// Any subset of [`ToastConfig`].
///
/// Used for the `[toast]` section of the settings file, for
/// [`Manager::configure`](crate::toast::Manager::configure), and for per-call
/// overrides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PartialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_duration_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_close: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_on_click: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_progress_bar: Option<bool>,
}

impl PartialConfig {
    /// An override that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_close_duration_ms(mut self, value: u64) -> Self {
        self.close_duration_ms = Some(value);
        self
    }

    #[must_use]
    pub fn with_auto_close(mut self, value: bool) -> Self {
        self.auto_close = Some(value);
        self
    }

    #[must_use]
    pub fn with_position(mut self, value: Position) -> Self {
        self.position = Some(value);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, value: usize) -> Self {
        self.limit = Some(value);
        self
    }

    #[must_use]
    pub fn with_pause_on_hover(mut self, value: bool) -> Self {
        self.pause_on_hover = Some(value);
        self
    }

    #[must_use]
    pub fn with_close_on_click(mut self, value: bool) -> Self {
        self.close_on_click = Some(value);
        self
    }

    #[must_use]
    pub fn with_hide_progress_bar(mut self, value: bool) -> Self {
        self.hide_progress_bar = Some(value);
        self
    }

    /// Layers `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn merged(&self, other: &PartialConfig) -> Self {
        Self {
            close_duration_ms: other.close_duration_ms.or(self.close_duration_ms),
            auto_close: other.auto_close.or(self.auto_close),
            position: other.position.or(self.position),
            limit: other.limit.or(self.limit),
            pause_on_hover: other.pause_on_hover.or(self.pause_on_hover),
            close_on_click: other.close_on_click.or(self.close_on_click),
            hide_progress_bar: other.hide_progress_bar.or(self.hide_progress_bar),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Animation section
// =============================================================================

/// Host-side animation timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct AnimationConfig {
    /// Fade-out length before a removed toast is detached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_transition_ms: Option<u64>,

    /// How often the host advances the timeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_ms: Option<u64>,
}

impl AnimationConfig {
    #[must_use]
    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(
            self.exit_transition_ms
                .unwrap_or(DEFAULT_EXIT_TRANSITION_MS),
        )
    }

    /// Tick interval, clamped to `MIN_TICK_MS..=MAX_TICK_MS`.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .tick_ms
            .unwrap_or(DEFAULT_TICK_MS)
            .clamp(MIN_TICK_MS, MAX_TICK_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Contents of `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Default toast options.
    #[serde(default)]
    pub toast: PartialConfig,

    /// Animation timing.
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Built-in defaults with the `[toast]` section applied.
    #[must_use]
    pub fn toast_defaults(&self) -> ToastConfig {
        ToastConfig::default().merged(&self.toast)
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If the file exists but
/// cannot be read or parsed, returns the default config together with
/// [`CONFIG_LOAD_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string())),
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

/// Saves the configuration to the default path.
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

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn merged_override_wins_and_defaults_are_untouched() {
        let defaults = ToastConfig::default();
        let overrides = PartialConfig::new()
            .with_position(Position::BottomLeft)
            .with_close_on_click(true);

        let resolved = defaults.merged(&overrides);

        assert_eq!(resolved.position, Position::BottomLeft);
        assert!(resolved.close_on_click);
        assert_eq!(resolved.close_duration_ms, DEFAULT_CLOSE_DURATION_MS);
        assert_eq!(defaults.position, Position::TopRight);
    }

    #[test]
    fn empty_override_is_identity() {
        let defaults = ToastConfig::default();
        assert_eq!(defaults.merged(&PartialConfig::new()), defaults);
        assert!(PartialConfig::new().is_empty());
    }

    #[test]
    fn partial_merge_prefers_later_layer() {
        let base = PartialConfig::new().with_limit(2).with_auto_close(false);
        let top = PartialConfig::new().with_limit(7);
        let merged = base.merged(&top);
        assert_eq!(merged.limit, Some(7));
        assert_eq!(merged.auto_close, Some(false));
    }

    #[test]
    fn zero_limit_admits_everything() {
        let config = ToastConfig::default().merged(&PartialConfig::new().with_limit(0));
        assert!(config.admits(0));
        assert!(config.admits(10_000));
    }

    #[test]
    fn positive_limit_admits_below_limit_only() {
        let config = ToastConfig::default().merged(&PartialConfig::new().with_limit(2));
        assert!(config.admits(1));
        assert!(!config.admits(2));
        assert!(!config.admits(3));
    }

    #[test]
    fn progress_bar_requires_auto_close() {
        let manual = ToastConfig::default().merged(&PartialConfig::new().with_auto_close(false));
        assert!(!manual.shows_progress_bar());

        let hidden =
            ToastConfig::default().merged(&PartialConfig::new().with_hide_progress_bar(true));
        assert!(!hidden.shows_progress_bar());

        assert!(ToastConfig::default().shows_progress_bar());
    }

    #[test]
    fn position_parses_kebab_case() {
        assert_eq!("bottom-center".parse::<Position>(), Ok(Position::BottomCenter));
        assert_eq!(" Top-Left ".parse::<Position>(), Ok(Position::TopLeft));
        assert!("middle".parse::<Position>().is_err());
    }

    #[test]
    fn toast_section_parses_from_toml() {
        let content = r#"
            [toast]
            close-duration-ms = 5000
            position = "bottom-center"
            limit = 0
        "#;
        let config: Config = toml::from_str(content).expect("valid toml");
        let resolved = config.toast_defaults();

        assert_eq!(resolved.close_duration_ms, 5000);
        assert_eq!(resolved.position, Position::BottomCenter);
        assert_eq!(resolved.limit, 0);
        assert_eq!(resolved.auto_close, DEFAULT_AUTO_CLOSE);
    }

    #[test]
    fn negative_limit_is_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[toast]\nlimit = -1\n");
        assert!(result.is_err());
    }

    #[test]
    fn tick_interval_is_clamped() {
        let fast = AnimationConfig {
            tick_ms: Some(1),
            ..AnimationConfig::default()
        };
        assert_eq!(fast.tick_interval(), Duration::from_millis(MIN_TICK_MS));

        let slow = AnimationConfig {
            tick_ms: Some(10_000),
            ..AnimationConfig::default()
        };
        assert_eq!(slow.tick_interval(), Duration::from_millis(MAX_TICK_MS));
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            toast: PartialConfig::new()
                .with_position(Position::BottomRight)
                .with_limit(3),
            animation: AnimationConfig {
                exit_transition_ms: Some(120),
                tick_ms: None,
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
            Err(Error::Parse(_)) => {}
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toast]\nlimit = -3\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
