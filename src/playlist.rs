// SPDX-License-Identifier: MPL-2.0
//! Playlist module for managing the session's video list and position.
//!
//! The playlist is handed over once at startup and stays fixed for the whole
//! session; only the current position moves. Navigation past either end is a
//! silent no-op rather than a wraparound, matching the on-screen arrows which
//! are hidden at the respective boundary.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A single video reference handed over by the launcher.
///
/// Immutable once loaded into the playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    /// Path to the video file.
    pub path: PathBuf,
    /// Name shown in the title bar while this video is current.
    pub display_name: String,
}

impl VideoRef {
    /// Creates a reference from a path, deriving the display name from the
    /// file name (falling back to the full path for odd inputs like `..`).
    pub fn from_path(path: PathBuf) -> Self {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, display_name }
    }
}

/// Direction of playlist navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Ordered list of videos with a current position.
///
/// Invariant: `current_index` is always a valid index into `items`.
/// The constructor rejects empty input, so the invariant holds from birth.
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    items: Vec<VideoRef>,
    current_index: usize,
}

impl Playlist {
    /// Creates a playlist positioned at the first entry.
    ///
    /// Returns `Error::Playlist` if `items` is empty.
    pub fn new(items: Vec<VideoRef>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::Playlist("playlist must contain at least one video".into()));
        }
        Ok(Self {
            items,
            current_index: 0,
        })
    }

    /// Moves the position by one in the given direction and returns the new
    /// current entry, or `None` (leaving the position unchanged) when the move
    /// would fall off either end of the list.
    pub fn advance(&mut self, direction: Direction) -> Option<&VideoRef> {
        let new_index = match direction {
            Direction::Forward => self.current_index.checked_add(1)?,
            Direction::Backward => self.current_index.checked_sub(1)?,
        };
        if new_index >= self.items.len() {
            return None;
        }
        self.current_index = new_index;
        Some(&self.items[self.current_index])
    }

    /// Resets the position to the first entry and returns it.
    pub fn rewind(&mut self) -> &VideoRef {
        self.current_index = 0;
        &self.items[0]
    }

    /// Returns the current entry.
    pub fn current(&self) -> &VideoRef {
        &self.items[self.current_index]
    }

    /// Returns the current position.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A playlist is never empty, but the conventional pair to `len` keeps
    /// clippy and callers happy.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the current entry is the first in the list.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    /// Whether the current entry is the last in the list.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.items.len()
    }
}

/// Reads a playlist file: one path per line, blank lines and `#` comments
/// ignored. Relative paths are resolved against the file's directory.
pub fn read_playlist_file(path: &Path) -> Result<Vec<VideoRef>> {
    let content = fs::read_to_string(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    let mut items = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let entry = PathBuf::from(line);
        let entry = if entry.is_absolute() {
            entry
        } else {
            base.join(entry)
        };
        items.push(VideoRef::from_path(entry));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn refs(names: &[&str]) -> Vec<VideoRef> {
        names
            .iter()
            .map(|n| VideoRef::from_path(PathBuf::from(n)))
            .collect()
    }

    #[test]
    fn new_rejects_empty_list() {
        let result = Playlist::new(Vec::new());
        assert!(matches!(result, Err(Error::Playlist(_))));
    }

    #[test]
    fn new_playlist_starts_at_first_entry() {
        let playlist = Playlist::new(refs(&["a.mp4", "b.mp4"])).unwrap();
        assert_eq!(playlist.current_index(), 0);
        assert_eq!(playlist.current().display_name, "a.mp4");
        assert!(playlist.is_first());
        assert!(!playlist.is_last());
    }

    #[test]
    fn advance_forward_moves_by_one() {
        let mut playlist = Playlist::new(refs(&["a.mp4", "b.mp4", "c.mp4"])).unwrap();
        let next = playlist.advance(Direction::Forward).unwrap();
        assert_eq!(next.display_name, "b.mp4");
        assert_eq!(playlist.current_index(), 1);
    }

    #[test]
    fn advance_backward_moves_by_one() {
        let mut playlist = Playlist::new(refs(&["a.mp4", "b.mp4"])).unwrap();
        playlist.advance(Direction::Forward);
        let prev = playlist.advance(Direction::Backward).unwrap();
        assert_eq!(prev.display_name, "a.mp4");
        assert_eq!(playlist.current_index(), 0);
    }

    #[test]
    fn advance_past_last_is_a_no_op() {
        let mut playlist = Playlist::new(refs(&["a.mp4", "b.mp4", "c.mp4"])).unwrap();
        playlist.advance(Direction::Forward);
        playlist.advance(Direction::Forward);
        assert_eq!(playlist.current_index(), 2);

        assert!(playlist.advance(Direction::Forward).is_none());
        assert_eq!(playlist.current_index(), 2);
        assert!(playlist.is_last());
    }

    #[test]
    fn advance_before_first_is_a_no_op() {
        let mut playlist = Playlist::new(refs(&["a.mp4", "b.mp4"])).unwrap();
        assert!(playlist.advance(Direction::Backward).is_none());
        assert_eq!(playlist.current_index(), 0);
    }

    #[test]
    fn single_entry_playlist_is_both_first_and_last() {
        let playlist = Playlist::new(refs(&["only.mp4"])).unwrap();
        assert!(playlist.is_first());
        assert!(playlist.is_last());
    }

    #[test]
    fn rewind_returns_to_first_entry() {
        let mut playlist = Playlist::new(refs(&["a.mp4", "b.mp4"])).unwrap();
        playlist.advance(Direction::Forward);
        assert_eq!(playlist.rewind().display_name, "a.mp4");
        assert_eq!(playlist.current_index(), 0);
    }

    #[test]
    fn display_name_is_derived_from_file_name() {
        let video = VideoRef::from_path(PathBuf::from("/videos/holiday.mkv"));
        assert_eq!(video.display_name, "holiday.mkv");
    }

    #[test]
    fn read_playlist_file_skips_comments_and_blank_lines() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let list_path = temp_dir.path().join("session.m3u");
        let mut file = fs::File::create(&list_path).expect("failed to create playlist file");
        writeln!(file, "# session playlist").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "intro.mp4").unwrap();
        writeln!(file, "/abs/feature.mkv").unwrap();

        let items = read_playlist_file(&list_path).expect("failed to read playlist");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].path, temp_dir.path().join("intro.mp4"));
        assert_eq!(items[1].path, PathBuf::from("/abs/feature.mkv"));
    }

    #[test]
    fn read_playlist_file_missing_file_is_io_error() {
        let result = read_playlist_file(Path::new("/nonexistent/list.m3u"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
