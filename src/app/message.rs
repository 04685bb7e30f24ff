// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::VideoError;
use crate::media::VideoMetadata;
use crate::player::LoadGeneration;
use crate::playlist::VideoRef;
use crate::ui::{chrome, controls, error_banner};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Chrome(chrome::Message),
    Controls(controls::Message),
    ErrorBanner(error_banner::Message),
    /// A metadata probe finished. Carries the generation minted when the
    /// load started; stale results are dropped by the session.
    MediaLoaded {
        generation: LoadGeneration,
        result: Result<VideoMetadata, VideoError>,
    },
    /// Current window bounds arrived for the one-time first-video window fit.
    WindowBoundsFetched {
        position: Option<iced::Point>,
        size: iced::Size,
    },
    /// Periodic tick for overlay auto-hide and end-of-media detection.
    Tick(Instant),
    /// Raw runtime event routed from the subscription.
    RawEvent {
        window: iced::window::Id,
        event: iced::event::Event,
    },
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// The session's videos, in play order. Validated non-empty by `main`.
    pub videos: Vec<VideoRef>,
    /// Optional data directory override (for the resume file).
    /// Takes precedence over the `ICED_REEL_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
}
