// SPDX-License-Identifier: MPL-2.0
//! Error banner sub-component.
//!
//! Rendered only while the session is in the failed phase. Shows a friendly
//! message with optional technical details and a reload affordance; there is
//! exactly one banner because it is derived from the single session phase.

use crate::error::VideoError;
use iced::widget::{button, column, container, text, Column};
use iced::{Alignment, Element, Length};

/// Error banner state.
#[derive(Debug, Clone)]
pub struct State {
    /// Friendly error message.
    friendly_text: &'static str,
    /// Technical error details.
    details: String,
    /// Whether to show the technical details.
    show_details: bool,
}

/// Messages for the error banner sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle visibility of technical details.
    ToggleDetails,
    /// Reload the failed video (handled by orchestrator).
    Reload,
}

impl State {
    /// Create a banner state from the blocking error.
    #[must_use]
    pub fn new(error: &VideoError) -> Self {
        Self {
            friendly_text: error.user_message(),
            details: error.to_string(),
            show_details: false,
        }
    }

    /// Handle a banner message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ToggleDetails => self.show_details = !self.show_details,
            Message::Reload => { /* handled by orchestrator */ }
        }
    }

    /// Get the friendly error message.
    #[must_use]
    pub fn friendly_text(&self) -> &'static str {
        self.friendly_text
    }

    /// Get the technical error details.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Check if details are currently shown.
    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }

    /// Render the banner.
    pub fn view(&self) -> Element<'_, Message> {
        let mut content: Column<'_, Message> = column![
            text(self.friendly_text).size(20),
            text("Press any key or click to try again").size(14),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        content = content.push(
            button(text(if self.show_details {
                "Hide details"
            } else {
                "Show details"
            }))
            .on_press(Message::ToggleDetails),
        );

        if self.show_details {
            content = content.push(text(&self.details).size(12));
        }

        content = content.push(button(text("Reload")).on_press(Message::Reload));

        container(content)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(16)
            .into()
    }
}
