// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, system locale opt-in and theme mode
//! - `[motion]` - Smooth scrolling and reveal animation tuning
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` environment variable or `--config-dir`
//! 3. Falls back to platform-specific config directory
//!
//! The page never writes its state back; [`save_to_path`] exists so a
//! default file can be generated and for tests.
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let motion = config.motion.resolved();
//! assert!(motion.reveal_threshold > 0.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language tag (e.g., "pt-BR", "en").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Use the OS locale when neither the CLI nor `language` picks one.
    #[serde(default)]
    pub follow_system_locale: bool,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            follow_system_locale: false,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Scrolling and reveal animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    /// Animate in-page navigation instead of jumping.
    #[serde(default = "default_smooth_scroll", skip_serializing_if = "Option::is_none")]
    pub smooth_scroll: Option<bool>,

    /// Smooth-scroll duration in milliseconds.
    #[serde(
        default = "default_scroll_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_duration_ms: Option<u32>,

    /// Visible fraction of an element required to reveal it.
    #[serde(
        default = "default_reveal_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_threshold: Option<f32>,

    /// Fade-in duration after reveal in milliseconds.
    #[serde(
        default = "default_reveal_fade_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_fade_ms: Option<u32>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: default_smooth_scroll(),
            scroll_duration_ms: default_scroll_duration_ms(),
            reveal_threshold: default_reveal_threshold(),
            reveal_fade_ms: default_reveal_fade_ms(),
        }
    }
}

/// Motion settings with defaults applied and values clamped to their
/// supported ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub smooth_scroll: bool,
    pub scroll_duration: Duration,
    pub reveal_threshold: f32,
    pub reveal_fade: Duration,
}

impl Default for Motion {
    fn default() -> Self {
        MotionConfig::default().resolved()
    }
}

impl MotionConfig {
    #[must_use]
    pub fn resolved(&self) -> Motion {
        let scroll_ms = self
            .scroll_duration_ms
            .unwrap_or(DEFAULT_SCROLL_DURATION_MS)
            .min(MAX_SCROLL_DURATION_MS);
        let fade_ms = self
            .reveal_fade_ms
            .unwrap_or(DEFAULT_REVEAL_FADE_MS)
            .min(MAX_REVEAL_FADE_MS);
        let threshold = self
            .reveal_threshold
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_REVEAL_THRESHOLD)
            .clamp(MIN_REVEAL_THRESHOLD, MAX_REVEAL_THRESHOLD);

        Motion {
            smooth_scroll: self.smooth_scroll.unwrap_or(true),
            scroll_duration: Duration::from_millis(u64::from(scroll_ms)),
            reveal_threshold: threshold,
            reveal_fade: Duration::from_millis(u64::from(fade_ms)),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Scrolling and reveal animation settings.
    #[serde(default)]
    pub motion: MotionConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn default_smooth_scroll() -> Option<bool> {
    Some(true)
}

fn default_scroll_duration_ms() -> Option<u32> {
    Some(DEFAULT_SCROLL_DURATION_MS)
}

fn default_reveal_threshold() -> Option<f32> {
    Some(DEFAULT_REVEAL_THRESHOLD)
}

fn default_reveal_fade_ms() -> Option<u32> {
    Some(DEFAULT_REVEAL_FADE_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file is not a
/// warning; an unreadable or invalid one is, and yields the defaults.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    return (config, None);
                }
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "ignoring {}: {err}; using default settings",
                            path.display()
                        )),
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

// =============================================================================
// Save Functions
// =============================================================================

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
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("en".to_string()),
                follow_system_locale: true,
                theme_mode: ThemeMode::Light,
            },
            motion: MotionConfig {
                smooth_scroll: Some(false),
                scroll_duration_ms: Some(250),
                reveal_threshold: Some(0.75),
                reveal_fade_ms: Some(300),
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
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"SYSTEM\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert!(!config.general.follow_system_locale);
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);

        let motion = config.motion.resolved();
        assert!(motion.smooth_scroll);
        assert_eq!(motion.scroll_duration, Duration::from_millis(600));
        assert_abs_diff_eq!(motion.reveal_threshold, 0.5);
        assert_eq!(motion.reveal_fade, Duration::from_millis(700));
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let config: Config =
            toml::from_str("[motion]\nreveal_threshold = 0.25\n").expect("valid config");
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.motion.reveal_threshold, Some(0.25));
        assert_eq!(config.motion.smooth_scroll, Some(true));
    }

    #[test]
    fn motion_values_are_clamped() {
        let motion = MotionConfig {
            smooth_scroll: None,
            scroll_duration_ms: Some(60_000),
            reveal_threshold: Some(3.0),
            reveal_fade_ms: Some(u32::MAX),
        }
        .resolved();
        assert!(motion.smooth_scroll);
        assert_eq!(
            motion.scroll_duration,
            Duration::from_millis(u64::from(MAX_SCROLL_DURATION_MS))
        );
        assert_abs_diff_eq!(motion.reveal_threshold, MAX_REVEAL_THRESHOLD);
        assert_eq!(
            motion.reveal_fade,
            Duration::from_millis(u64::from(MAX_REVEAL_FADE_MS))
        );

        let low = MotionConfig {
            reveal_threshold: Some(0.0),
            ..MotionConfig::default()
        }
        .resolved();
        assert_abs_diff_eq!(low.reveal_threshold, MIN_REVEAL_THRESHOLD);
    }

    #[test]
    fn non_finite_threshold_falls_back_to_default() {
        let motion = MotionConfig {
            reveal_threshold: Some(f32::NAN),
            ..MotionConfig::default()
        }
        .resolved();
        assert_abs_diff_eq!(motion.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nlanguage = ")
            .expect("failed to write corrupted config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some_and(|w| w.contains(CONFIG_FILE)));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        save_to_path(&Config::default(), &path).expect("failed to save config");

        let content = fs::read_to_string(&path).expect("failed to read config");
        assert!(content.contains("[general]"));
        assert!(content.contains("[motion]"));
    }
}
