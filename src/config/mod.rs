// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[feed]` - Toast queue capacity, timings and the generator source
//!
//! Every field is optional; missing values fall back to [`defaults`] and
//! out-of-range values are clamped by the domain newtypes when converted
//! into runtime options.
//!
//! # Examples
//!
//! ```no_run
//! use toast_feed::config;
//!
//! let (mut config, _warning) = config::load();
//! config.feed.max_visible = Some(6);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::feed::{AnimationDuration, AutoDismissTimeout, GenerationInterval, MaxVisible};
use crate::error::Result;
use crate::notifications::{ControllerOptions, FeedUser, GeneratorOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing settings file cannot be read.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// A user shown on every generated toast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixedUserConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<&FixedUserConfig> for FeedUser {
    fn from(config: &FixedUserConfig) -> Self {
        FeedUser {
            name: config.name.clone(),
            avatar: config.avatar.clone(),
            color: config.color.clone(),
        }
    }
}

/// Toast queue and generator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedConfig {
    /// Maximum number of visible (non-fading) toasts.
    #[serde(default = "default_max_visible", skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,

    /// Milliseconds between two generated toasts.
    #[serde(default = "default_interval_ms", skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Milliseconds before a toast fades on its own; 0 disables.
    #[serde(
        default = "default_auto_dismiss_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_dismiss_ms: Option<u64>,

    /// Length of the fade-out animation in milliseconds.
    #[serde(default = "default_animation_ms", skip_serializing_if = "Option::is_none")]
    pub animation_ms: Option<u64>,

    /// Random-user endpoint for display names.
    #[serde(default = "default_endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Whether the endpoint is queried at all.
    #[serde(
        default = "default_remote_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub remote_enabled: Option<bool>,

    /// Always show this user. Disables remote fetching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_user: Option<FixedUserConfig>,

    /// Custom message pool. Empty uses the built-in messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
            interval_ms: default_interval_ms(),
            auto_dismiss_ms: default_auto_dismiss_ms(),
            animation_ms: default_animation_ms(),
            endpoint: default_endpoint(),
            remote_enabled: default_remote_enabled(),
            fixed_user: None,
            messages: Vec::new(),
        }
    }
}

impl FeedConfig {
    /// Queue tuning with every value clamped to its valid range.
    #[must_use]
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            max_visible: MaxVisible::new(self.max_visible.unwrap_or(DEFAULT_MAX_VISIBLE)),
            auto_dismiss: AutoDismissTimeout::from_millis(
                self.auto_dismiss_ms.unwrap_or(DEFAULT_AUTO_DISMISS_MS),
            ),
            animation: AnimationDuration::from_millis(
                self.animation_ms.unwrap_or(DEFAULT_ANIMATION_MS),
            ),
        }
    }

    #[must_use]
    pub fn interval(&self) -> GenerationInterval {
        GenerationInterval::from_millis(self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS))
    }

    /// Generator source. `offline` forces local names.
    #[must_use]
    pub fn generator_options(&self, offline: bool) -> GeneratorOptions {
        let remote = !offline && self.remote_enabled.unwrap_or(true);
        GeneratorOptions {
            endpoint: if remote {
                self.endpoint.clone().filter(|e| !e.trim().is_empty())
            } else {
                None
            },
            fixed_user: self.fixed_user.as_ref().map(FeedUser::from),
            messages: self
                .messages
                .iter()
                .filter(|m| !m.trim().is_empty())
                .cloned()
                .collect(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub feed: FeedConfig,
}

fn default_max_visible() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE)
}

fn default_interval_ms() -> Option<u64> {
    Some(DEFAULT_INTERVAL_MS)
}

fn default_auto_dismiss_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_DISMISS_MS)
}

fn default_animation_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATION_MS)
}

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_ENDPOINT.to_string())
}

fn default_remote_enabled() -> Option<bool> {
    Some(true)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns the config plus an optional warning key. A missing file is not a
/// warning; an unreadable one yields defaults and [`CONFIG_LOAD_WARNING`].
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
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings, using defaults");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
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
