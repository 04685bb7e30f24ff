// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedReel";

pub const DEFAULT_OVERLAY_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_TITLE_BAR_HEIGHT: f32 = 33.0;
pub const DEFAULT_SCREEN_AVAIL_WIDTH: f32 = 1920.0;
pub const DEFAULT_SCREEN_AVAIL_HEIGHT: f32 = 1080.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether playback starts automatically once the first video is ready.
    #[serde(default)]
    pub autoplay: Option<bool>,
    /// Seconds of mouse quiescence before the controls overlay hides.
    #[serde(default)]
    pub overlay_timeout_secs: Option<u64>,
    /// Height of the window title bar, used by the window-fit computation.
    #[serde(default)]
    pub title_bar_height: Option<f32>,
    /// Usable screen area. Iced exposes no monitor geometry query, so the
    /// work area the window must fit into comes from here.
    #[serde(default)]
    pub screen_avail_width: Option<f32>,
    #[serde(default)]
    pub screen_avail_height: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autoplay: Some(true),
            overlay_timeout_secs: Some(DEFAULT_OVERLAY_TIMEOUT_SECS),
            title_bar_height: Some(DEFAULT_TITLE_BAR_HEIGHT),
            screen_avail_width: None,
            screen_avail_height: None,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, writing the defaults on first launch so the
/// settings file exists and can be edited.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
        let config = Config::default();
        save_to_path(&config, &path)?;
        return Ok(config);
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            autoplay: Some(false),
            overlay_timeout_secs: Some(5),
            title_bar_height: Some(28.0),
            screen_avail_width: Some(2560.0),
            screen_avail_height: Some(1400.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.autoplay, config.autoplay);
        assert_eq!(loaded.overlay_timeout_secs, config.overlay_timeout_secs);
        assert_eq!(loaded.title_bar_height, config.title_bar_height);
        assert_eq!(loaded.screen_avail_width, config.screen_avail_width);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.overlay_timeout_secs.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_enables_autoplay() {
        let config = Config::default();
        assert_eq!(config.autoplay, Some(true));
        assert_eq!(
            config.overlay_timeout_secs,
            Some(DEFAULT_OVERLAY_TIMEOUT_SECS)
        );
    }
}
