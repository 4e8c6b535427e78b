//! Application configuration.

use crate::toast::ToastTimings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Optional path to a custom menu catalog (TOML). The built-in house
    /// menu is used when unset.
    #[serde(default)]
    pub menu_path: Option<PathBuf>,
    /// Toast notification timing and gesture tuning
    #[serde(default)]
    pub toast: ToastConfig,
}

/// Toast tuning knobs, all optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    /// How long the toast stays fully visible (ms)
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
    /// How long it lingers while hiding before the slot clears (ms)
    #[serde(default = "default_linger_ms")]
    pub linger_ms: u64,
    /// Cleanup delay after a swipe-dismiss (ms)
    #[serde(default = "default_fast_dismiss_ms")]
    pub fast_dismiss_ms: u64,
    /// Downward drag distance (gesture points) that commits to dismissal
    #[serde(default = "default_dismiss_threshold")]
    pub dismiss_threshold: f32,
    /// Drag distance at which the toast fades out completely
    #[serde(default = "default_fade_distance")]
    pub fade_distance: f32,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_display_ms() -> u64 {
    4000
}

fn default_linger_ms() -> u64 {
    2000
}

fn default_fast_dismiss_ms() -> u64 {
    300
}

fn default_dismiss_threshold() -> f32 {
    55.0
}

fn default_fade_distance() -> f32 {
    180.0
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
            linger_ms: default_linger_ms(),
            fast_dismiss_ms: default_fast_dismiss_ms(),
            dismiss_threshold: default_dismiss_threshold(),
            fade_distance: default_fade_distance(),
        }
    }
}

impl ToastConfig {
    /// Convert the file representation into controller timings.
    pub fn timings(&self) -> ToastTimings {
        ToastTimings {
            display: Duration::from_millis(self.display_ms),
            linger: Duration::from_millis(self.linger_ms),
            fast_dismiss: Duration::from_millis(self.fast_dismiss_ms),
            dismiss_threshold: self.dismiss_threshold,
            fade_distance: self.fade_distance,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            menu_path: None,
            toast: ToastConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or create the default one on first run.
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }
}

/// Default config file location under the platform config directory.
pub fn get_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("barcarte")
        .join("config.toml")
}
