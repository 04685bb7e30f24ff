// SPDX-License-Identifier: MPL-2.0
//! Resume position persistence using CBOR format.
//!
//! The only state that survives a session is the playback position per video
//! file. It is written once on exit and read back when the same file is
//! loaded again. Stored in CBOR (compact, fast) under the app data directory,
//! separate from the user-editable TOML preferences.

use super::paths;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const RESUME_FILE: &str = "resume.cbor";

/// Playback positions that persist across sessions, keyed by video path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResumeStore {
    #[serde(default)]
    positions: HashMap<PathBuf, f64>,
}

impl ResumeStore {
    /// Loads the store from the given base directory, or the default data
    /// directory when `None`.
    ///
    /// Returns `(store, optional_warning)`. A missing file is not a warning;
    /// an unreadable or unparsable one falls back to an empty store with a
    /// message the caller may log.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(store) => (store, None),
                    Err(_) => (
                        Self::default(),
                        Some("resume file is unreadable; starting fresh".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("resume file could not be opened".to_string()),
            ),
        }
    }

    /// Saves the store under the given base directory (default data
    /// directory when `None`), creating directories as needed. Returns a
    /// warning message if the save failed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::file_path_with_override(base_dir) else {
            return Some("no data directory available for resume file".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("could not create data directory".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("could not write resume file".to_string());
                }
                None
            }
            Err(_) => Some("could not create resume file".to_string()),
        }
    }

    /// Saved position for a video, if one exists.
    #[must_use]
    pub fn position_for(&self, path: &Path) -> Option<f64> {
        self.positions.get(path).copied()
    }

    /// Records the position for a video. Positions at (or within a second of)
    /// the start are removed instead, so short accidental opens do not leave
    /// stale resume points.
    pub fn set_position(&mut self, path: &Path, position_secs: f64) {
        if position_secs < 1.0 {
            self.positions.remove(path);
        } else {
            self.positions.insert(path.to_path_buf(), position_secs);
        }
    }

    /// Returns the full path to the resume file with optional override.
    fn file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(RESUME_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip_preserves_positions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let mut store = ResumeStore::default();
        store.set_position(Path::new("/videos/a.mp4"), 42.5);
        store.set_position(Path::new("/videos/b.mkv"), 120.0);
        assert!(store.save_to(base.clone()).is_none());

        let (loaded, warning) = ResumeStore::load_from(base);
        assert!(warning.is_none());
        assert_eq!(loaded.position_for(Path::new("/videos/a.mp4")), Some(42.5));
        assert_eq!(loaded.position_for(Path::new("/videos/b.mkv")), Some(120.0));
    }

    #[test]
    fn missing_file_loads_empty_store_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (store, warning) = ResumeStore::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(store, ResumeStore::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(RESUME_FILE), b"not cbor at all")
            .expect("failed to write corrupt file");

        let (store, warning) = ResumeStore::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(store, ResumeStore::default());
        assert!(warning.is_some());
    }

    #[test]
    fn near_start_positions_are_dropped() {
        let mut store = ResumeStore::default();
        store.set_position(Path::new("/v.mp4"), 30.0);
        store.set_position(Path::new("/v.mp4"), 0.4);
        assert_eq!(store.position_for(Path::new("/v.mp4")), None);
    }
}
