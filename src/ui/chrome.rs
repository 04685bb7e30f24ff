// SPDX-License-Identifier: MPL-2.0
//! Window chrome: title bar with minimize / maximize-restore / close buttons.
//!
//! The buttons emit fire-and-forget window commands; nothing here waits for
//! the window manager to answer.

use iced::widget::{button, container, text, Row};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the title bar.
pub struct ViewContext<'a> {
    /// Display name of the current video.
    pub title: &'a str,
    /// Whether the window is currently maximized (picks the button glyph).
    pub maximized: bool,
}

/// Messages emitted by the title bar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Minimize,
    ToggleMaximize,
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Minimize,
    ToggleMaximize,
    Close,
}

/// Process a title bar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Minimize => Event::Minimize,
        Message::ToggleMaximize => Event::ToggleMaximize,
        Message::Close => Event::Close,
    }
}

/// Render the title bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let restore_or_maximize = if ctx.maximized { "🗗" } else { "🗖" };

    let buttons = Row::new()
        .spacing(4)
        .push(button(text("🗕")).on_press(Message::Minimize))
        .push(button(text(restore_or_maximize)).on_press(Message::ToggleMaximize))
        .push(button(text("🗙")).on_press(Message::Close));

    let bar = Row::new()
        .align_y(Alignment::Center)
        .padding([4, 8])
        .push(
            container(text(ctx.title).size(14))
                .width(Length::Fill)
                .align_x(Alignment::Start),
        )
        .push(buttons);

    container(bar).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_matching_events() {
        assert_eq!(update(Message::Minimize), Event::Minimize);
        assert_eq!(update(Message::ToggleMaximize), Event::ToggleMaximize);
        assert_eq!(update(Message::Close), Event::Close);
    }
}
