// SPDX-License-Identifier: MPL-2.0
//! Load session state machine with stale-completion suppression.
//!
//! At most one video is attached at a time. Starting a load unconditionally
//! discards whatever was attached before (unload-before-load) and hands out a
//! new [`LoadGeneration`]. A completion carrying any other generation is
//! stale: the user navigated away while the load was in flight, and the
//! result is dropped without touching the session. The generation check is
//! the only cancellation mechanism; in-flight probes are never aborted.

use crate::error::VideoError;
use crate::media::VideoMetadata;

/// Monotonic identifier of a load request.
///
/// A new one is minted by every [`Session::begin_load`]; completions must
/// present theirs to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadGeneration(u64);

/// What the session is currently doing.
///
/// This replaces implicit attribute flags with one explicit state: the error
/// banner, the disabled controls, and the loading indicator all render from
/// this enum.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    /// Nothing attached yet.
    #[default]
    Idle,
    /// A load is in flight; metadata is not known yet.
    Loading,
    /// Metadata arrived; the video is attached and playable.
    Ready(VideoMetadata),
    /// Decode or load failure. Interaction is suppressed until the user
    /// explicitly requests a reload.
    Failed(VideoError),
}

/// Outcome of presenting a load result to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The result matched the current generation and the session is ready.
    Ready,
    /// The result matched the current generation and carried an error.
    Failed,
    /// The result belonged to a superseded load and was dropped.
    Stale,
}

/// The single attachment slot for the currently loading or loaded video.
#[derive(Debug, Clone, Default)]
pub struct Session {
    generation: u64,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load: discards any previous attachment, clears a prior
    /// failure, and returns the generation the eventual completion must carry.
    pub fn begin_load(&mut self) -> LoadGeneration {
        self.generation += 1;
        self.phase = Phase::Loading;
        LoadGeneration(self.generation)
    }

    /// Applies a load result if it belongs to the current load.
    ///
    /// Stale results (the user navigated on before the load finished) leave
    /// the session untouched.
    pub fn complete_load(
        &mut self,
        generation: LoadGeneration,
        result: Result<VideoMetadata, VideoError>,
    ) -> Completion {
        if generation.0 != self.generation {
            log::warn!(
                "dropping stale load completion (generation {} != current {})",
                generation.0,
                self.generation
            );
            return Completion::Stale;
        }

        match result {
            Ok(metadata) => {
                self.phase = Phase::Ready(metadata);
                Completion::Ready
            }
            Err(error) => {
                log::error!("load failed: {error}");
                self.phase = Phase::Failed(error);
                Completion::Failed
            }
        }
    }

    /// Records a decode failure surfaced after the video was ready.
    ///
    /// The attachment is dropped immediately so a possibly-corrupt decoder
    /// instance is never reused. Repeated failures keep the first error so
    /// the banner does not churn.
    pub fn fail_playback(&mut self, error: VideoError) {
        if matches!(self.phase, Phase::Failed(_)) {
            return;
        }
        log::error!("playback failed: {error}");
        self.phase = Phase::Failed(error);
    }

    /// The generation completions must currently match.
    #[must_use]
    pub fn current_generation(&self) -> LoadGeneration {
        LoadGeneration(self.generation)
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Metadata of the attached video, when ready.
    #[must_use]
    pub fn metadata(&self) -> Option<&VideoMetadata> {
        match &self.phase {
            Phase::Ready(metadata) => Some(metadata),
            _ => None,
        }
    }

    /// The error currently blocking playback, if any.
    #[must_use]
    pub fn error(&self) -> Option<&VideoError> {
        match &self.phase {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.phase, Phase::Failed(_))
    }
}
