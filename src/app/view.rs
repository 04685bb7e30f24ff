// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the title bar (hidden in fullscreen), the video stage for the
//! current loading phase, and the auto-hiding controls row.

use super::{App, Message};
use crate::player::Phase;
use crate::ui::{chrome, controls};
use iced::widget::{container, text, Column};
use iced::{Alignment, Element, Length};
use std::time::Duration;

/// Renders the whole window content from the current application state.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if !app.fullscreen {
        let bar = chrome::view(chrome::ViewContext {
            title: &app.playlist.current().display_name,
            maximized: app.maximized,
        })
        .map(Message::Chrome);
        column = column.push(bar);
    }

    column = column.push(
        container(view_stage(app))
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if app.session.is_ready() && app.overlay.controls_visible {
        column = column.push(view_controls(app));
    }

    container(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The main area between the title bar and the controls.
fn view_stage(app: &App) -> Element<'_, Message> {
    match app.session.phase() {
        Phase::Idle | Phase::Loading => centered(text("Loading…").size(18).into()),
        Phase::Ready(_) => {
            // Frame rendering is delegated to the platform surface; the
            // stage shows the current entry while it plays underneath.
            let glyph = if app.playback.is_playing() {
                "▶"
            } else {
                "⏸"
            };
            let label = Column::new()
                .align_x(Alignment::Center)
                .spacing(12)
                .push(text(glyph).size(48))
                .push(text(&app.playlist.current().display_name).size(16));
            centered(label.into())
        }
        Phase::Failed(_) => match &app.banner {
            Some(banner) => centered(banner.view().map(Message::ErrorBanner)),
            // Unreachable in practice; the banner is created on failure.
            None => centered(text("Playback error").size(18).into()),
        },
    }
}

fn view_controls(app: &App) -> Element<'_, Message> {
    let (position, duration) = match &app.clock {
        Some(clock) => (clock.position(), clock.duration()),
        None => (Duration::ZERO, Duration::ZERO),
    };

    controls::view(&controls::ViewContext {
        playing: app.playback.is_playing(),
        multiple: app.playlist.len() > 1,
        at_first: app.playlist.is_first(),
        at_last: app.playlist.is_last(),
        position,
        duration,
    })
    .map(Message::Controls)
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
