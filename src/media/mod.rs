// SPDX-License-Identifier: MPL-2.0
//! Media types and format support.

pub mod probe;

use std::path::Path;

/// Supported video file extensions (lowercase, without the dot).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm", "mpg", "mpeg"];

/// Intrinsic media properties learned at metadata-ready time.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    /// Video width in pixels
    pub width: u32,
    /// Video height in pixels
    pub height: u32,
    /// Duration in seconds
    pub duration_secs: f64,
    /// Frames per second
    pub fps: f64,
    /// Whether the video has an audio track
    pub has_audio: bool,
}

/// Checks whether a path has a supported video extension.
pub fn is_supported_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            VIDEO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
