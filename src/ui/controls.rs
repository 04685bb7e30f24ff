// SPDX-License-Identifier: MPL-2.0
//! Playback controls overlay: play/pause, playlist arrows, position readout.
//!
//! Navigation arrows are derived from playlist state: the left arrow is
//! absent on the first entry, the right arrow on the last, and both when the
//! playlist holds a single video.

use iced::widget::{button, container, text, Row};
use iced::{Alignment, Element, Length};
use std::time::Duration;

/// Contextual data needed to render the controls.
pub struct ViewContext {
    /// Whether playback is running (picks the play/pause glyph).
    pub playing: bool,
    /// Whether the playlist holds more than one video.
    pub multiple: bool,
    /// Whether the current video is the first in the playlist.
    pub at_first: bool,
    /// Whether the current video is the last in the playlist.
    pub at_last: bool,
    /// Current playback position.
    pub position: Duration,
    /// Media duration.
    pub duration: Duration,
}

/// Messages emitted by the controls.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    TogglePlayback,
    Previous,
    Next,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    TogglePlayback,
    Previous,
    Next,
}

/// Process a controls message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::TogglePlayback => Event::TogglePlayback,
        Message::Previous => Event::Previous,
        Message::Next => Event::Next,
    }
}

/// Render the controls row.
pub fn view(ctx: &ViewContext) -> Element<'static, Message> {
    let mut row = Row::new().spacing(12).align_y(Alignment::Center);

    if ctx.multiple && !ctx.at_first {
        row = row.push(button(text("⏮")).on_press(Message::Previous));
    }

    let play_glyph = if ctx.playing { "⏸" } else { "▶" };
    row = row.push(button(text(play_glyph).size(20)).on_press(Message::TogglePlayback));

    if ctx.multiple && !ctx.at_last {
        row = row.push(button(text("⏭")).on_press(Message::Next));
    }

    row = row.push(text(format!(
        "{} / {}",
        format_timestamp(ctx.position),
        format_timestamp(ctx.duration)
    )));

    container(row)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(8)
        .into()
}

/// Formats a duration as `m:ss`, or `h:mm:ss` for long media.
pub fn format_timestamp(value: Duration) -> String {
    let total = value.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
