// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **Environment variable** (`ICED_REEL_DATA_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedReel";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_REEL_DATA_DIR";

/// Returns the application data directory, honoring an explicit override.
///
/// This directory stores application state (resume positions), not user
/// preferences; those live in the config directory via `config::load`.
///
/// - Linux: `~/.local/share/IcedReel/`
/// - macOS: `~/Library/Application Support/IcedReel/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedReel\`
pub fn get_app_data_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }

    if let Ok(env_dir) = std::env::var(ENV_DATA_DIR) {
        if !env_dir.is_empty() {
            return Some(PathBuf::from(env_dir));
        }
    }

    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let override_dir = PathBuf::from("/tmp/reel-test-data");
        let resolved = get_app_data_dir_with_override(Some(override_dir.clone()));
        assert_eq!(resolved, Some(override_dir));
    }

    #[test]
    fn default_resolution_appends_app_name() {
        // Only meaningful when the env var is not set in the test environment.
        if std::env::var(ENV_DATA_DIR).is_ok() {
            return;
        }
        if let Some(path) = get_app_data_dir_with_override(None) {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
