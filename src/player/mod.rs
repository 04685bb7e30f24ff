// SPDX-License-Identifier: MPL-2.0
//! Playback state: the load session, the play/pause state machine, and the
//! position clock.

mod clock;
mod playback;
mod session;

pub use clock::PositionClock;
pub use playback::PlaybackState;
pub use session::{Completion, LoadGeneration, Phase, Session};
