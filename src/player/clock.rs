// SPDX-License-Identifier: MPL-2.0
//! Wall-clock playback position tracking.
//!
//! The chrome does not decode frames, so the position shown in the controls
//! and persisted on exit is tracked against the wall clock: accumulated time
//! while playing, frozen while paused, capped at the media duration.

use std::time::{Duration, Instant};

/// Tracks the playback position of the attached video.
#[derive(Debug, Clone)]
pub struct PositionClock {
    /// Accumulated position while not running.
    base: Duration,
    /// Set while playing; elapsed time since this instant is added to `base`.
    running_since: Option<Instant>,
    /// Media duration; positions are capped at this.
    duration: Duration,
}

impl PositionClock {
    /// Creates a clock for media of the given duration, positioned at zero.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            base: Duration::ZERO,
            running_since: None,
            duration,
        }
    }

    /// Creates a clock resumed at a saved position.
    #[must_use]
    pub fn resumed_at(duration: Duration, position: Duration) -> Self {
        let mut clock = Self::new(duration);
        clock.base = position.min(duration);
        clock
    }

    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }

    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    /// Current position, capped at the media duration.
    #[must_use]
    pub fn position(&self) -> Duration {
        self.position_at(Instant::now())
    }

    /// Jumps to an absolute position (clamped to the duration).
    pub fn seek_to(&mut self, position: Duration) {
        let was_running = self.running_since.is_some();
        self.base = position.min(self.duration);
        self.running_since = was_running.then(Instant::now);
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub(crate) fn play_at(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    pub(crate) fn pause_at(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.base = (self.base + now.duration_since(since)).min(self.duration);
        }
    }

    pub(crate) fn position_at(&self, now: Instant) -> Duration {
        let elapsed = self
            .running_since
            .map(|since| now.duration_since(since))
            .unwrap_or(Duration::ZERO);
        (self.base + elapsed).min(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clock_starts_at_zero() {
        let clock = PositionClock::new(Duration::from_secs(60));
        assert_eq!(clock.position(), Duration::ZERO);
    }

    #[test]
    fn position_advances_only_while_playing() {
        let start = Instant::now();
        let mut clock = PositionClock::new(Duration::from_secs(60));

        clock.play_at(start);
        let after_play = start + Duration::from_secs(5);
        assert_eq!(clock.position_at(after_play), Duration::from_secs(5));

        clock.pause_at(after_play);
        let after_pause = after_play + Duration::from_secs(3);
        assert_eq!(clock.position_at(after_pause), Duration::from_secs(5));
    }

    #[test]
    fn position_is_capped_at_duration() {
        let start = Instant::now();
        let mut clock = PositionClock::new(Duration::from_secs(10));
        clock.play_at(start);
        let long_after = start + Duration::from_secs(30);
        assert_eq!(clock.position_at(long_after), Duration::from_secs(10));
    }

    #[test]
    fn resumed_clock_starts_at_saved_position() {
        let clock =
            PositionClock::resumed_at(Duration::from_secs(120), Duration::from_secs(45));
        assert_eq!(clock.position(), Duration::from_secs(45));
    }

    #[test]
    fn resume_position_is_clamped_to_duration() {
        let clock =
            PositionClock::resumed_at(Duration::from_secs(30), Duration::from_secs(99));
        assert_eq!(clock.position(), Duration::from_secs(30));
    }

    #[test]
    fn seek_moves_position() {
        let mut clock = PositionClock::new(Duration::from_secs(60));
        clock.seek_to(Duration::from_secs(20));
        assert_eq!(clock.position(), Duration::from_secs(20));
    }

    #[test]
    fn play_twice_does_not_reset_running_origin() {
        let start = Instant::now();
        let mut clock = PositionClock::new(Duration::from_secs(60));
        clock.play_at(start);
        clock.play_at(start + Duration::from_secs(2));
        assert_eq!(
            clock.position_at(start + Duration::from_secs(4)),
            Duration::from_secs(4)
        );
    }
}
