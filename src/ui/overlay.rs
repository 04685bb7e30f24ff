// SPDX-License-Identifier: MPL-2.0
//! Controls-overlay visibility sub-component.
//!
//! The playback controls hide after a period of mouse quiescence and come
//! back on movement. The watcher is disabled entirely while the player is in
//! an error state; the banner stays, the controls stay hidden.

use iced::Point;
use std::time::{Duration, Instant};

/// Minimum mouse movement to be considered significant.
const MOUSE_MOVEMENT_THRESHOLD: f32 = 10.0;

/// Overlay visibility state for the playback controls.
#[derive(Debug, Clone)]
pub struct State {
    /// Whether the controls are visible.
    pub controls_visible: bool,
    /// Quiescence period before hiding.
    hide_delay: Duration,
    /// Watcher off switch (error state).
    disabled: bool,
    /// Last significant mouse movement timestamp.
    last_mouse_move: Option<Instant>,
    /// Last user interaction with overlay controls.
    last_interaction: Option<Instant>,
    /// Last mouse position (to filter micro-movements).
    last_mouse_position: Option<Point>,
}

/// Messages for the overlay sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Mouse moved to a new position.
    MouseMoved(Point),
    /// User interacted with overlay controls.
    Interaction,
    /// Check if the controls should be hidden due to timeout.
    CheckTimeout,
}

/// Effects produced by overlay visibility changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Visibility changed.
    VisibilityChanged(bool),
}

impl State {
    /// Creates an overlay state with controls visible.
    #[must_use]
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            controls_visible: true,
            hide_delay,
            disabled: false,
            last_mouse_move: None,
            last_interaction: None,
            last_mouse_position: None,
        }
    }

    /// Disables or re-enables the inactivity watcher.
    ///
    /// While disabled the controls stay hidden and mouse movement is ignored.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.controls_visible = false;
        } else {
            self.controls_visible = true;
            self.last_mouse_move = Some(Instant::now());
        }
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Handle an overlay message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        self.handle_at(msg, Instant::now())
    }

    pub(crate) fn handle_at(&mut self, msg: Message, now: Instant) -> Effect {
        if self.disabled {
            return Effect::None;
        }

        match msg {
            Message::MouseMoved(pos) => {
                // Filter micro-movements (sensor noise)
                let is_significant = self.last_mouse_position.is_none_or(|last| {
                    let dx = pos.x - last.x;
                    let dy = pos.y - last.y;
                    (dx * dx + dy * dy).sqrt() > MOUSE_MOVEMENT_THRESHOLD
                });

                self.last_mouse_position = Some(pos);

                if is_significant {
                    self.last_mouse_move = Some(now);
                    if !self.controls_visible {
                        self.controls_visible = true;
                        return Effect::VisibilityChanged(true);
                    }
                }
                Effect::None
            }
            Message::Interaction => {
                self.last_interaction = Some(now);
                if !self.controls_visible {
                    self.controls_visible = true;
                    return Effect::VisibilityChanged(true);
                }
                Effect::None
            }
            Message::CheckTimeout => {
                let last_activity = [self.last_mouse_move, self.last_interaction]
                    .into_iter()
                    .flatten()
                    .max();

                let quiescent = last_activity
                    .is_none_or(|at| now.duration_since(at) >= self.hide_delay);

                if quiescent && self.controls_visible {
                    self.controls_visible = false;
                    return Effect::VisibilityChanged(false);
                }
                Effect::None
            }
        }
    }
}
