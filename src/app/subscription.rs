// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard, mouse, and window events into the update loop and
//! drives the periodic tick used by the position readout and the overlay
//! auto-hide timer.

use super::{App, Message};
use iced::{event, time, window, Subscription};
use std::time::Duration;

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([event::listen_with(route_event), create_tick_subscription(app)])
}

/// Routes a native event to the update loop.
///
/// Window close requests are always intercepted so the resume store gets
/// flushed before the window goes away. Window open/resize events are
/// forwarded so the update loop learns the window id before any user input
/// arrives. Mouse button presses are only routed when no widget captured
/// them, so clicks on controls don't double as stage clicks; cursor movement
/// and keyboard input are routed regardless of status because the overlay
/// timer and the shortcuts want all of them.
pub(super) fn route_event(
    event: event::Event,
    status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    if let event::Event::Window(window::Event::CloseRequested) = &event {
        return Some(Message::WindowCloseRequested(window_id));
    }

    if let event::Event::Window(window::Event::Opened { .. } | window::Event::Resized(_)) = &event
    {
        return Some(Message::RawEvent {
            window: window_id,
            event,
        });
    }

    if matches!(
        event,
        event::Event::Mouse(iced::mouse::Event::ButtonPressed(_))
    ) {
        return match status {
            event::Status::Ignored => Some(Message::RawEvent {
                window: window_id,
                event,
            }),
            event::Status::Captured => None,
        };
    }

    if matches!(
        event,
        event::Event::Mouse(iced::mouse::Event::CursorMoved { .. })
            | event::Event::Keyboard(..)
    ) {
        return Some(Message::RawEvent {
            window: window_id,
            event,
        });
    }

    None
}

/// Periodic tick for the overlay auto-hide timer and the position readout.
///
/// Runs while playback advances or while the controls are visible and may
/// still need to hide; otherwise nothing in the UI changes over time and the
/// subscription is dropped.
fn create_tick_subscription(app: &App) -> Subscription<Message> {
    let overlay_pending = app.overlay.controls_visible && !app.overlay.is_disabled();
    if app.playback.is_playing() || overlay_pending {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{keyboard, mouse, Point, Size};

    fn id() -> window::Id {
        window::Id::unique()
    }

    #[test]
    fn window_resize_is_routed_before_any_user_input() {
        let event = event::Event::Window(window::Event::Resized(Size::new(640.0, 480.0)));
        let routed = route_event(event, event::Status::Captured, id());
        assert!(matches!(routed, Some(Message::RawEvent { .. })));
    }

    #[test]
    fn close_request_is_always_intercepted() {
        let event = event::Event::Window(window::Event::CloseRequested);
        let routed = route_event(event, event::Status::Captured, id());
        assert!(matches!(routed, Some(Message::WindowCloseRequested(_))));
    }

    #[test]
    fn captured_mouse_press_is_not_routed() {
        let event = event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(route_event(event.clone(), event::Status::Captured, id()).is_none());
        assert!(matches!(
            route_event(event, event::Status::Ignored, id()),
            Some(Message::RawEvent { .. })
        ));
    }

    #[test]
    fn cursor_movement_is_routed_regardless_of_status() {
        let event = event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(10.0, 10.0),
        });
        let routed = route_event(event, event::Status::Captured, id());
        assert!(matches!(routed, Some(Message::RawEvent { .. })));
    }

    #[test]
    fn keyboard_input_is_routed_regardless_of_status() {
        let event = event::Event::Keyboard(keyboard::Event::ModifiersChanged(
            keyboard::Modifiers::CTRL,
        ));
        let routed = route_event(event, event::Status::Captured, id());
        assert!(matches!(routed, Some(Message::RawEvent { .. })));
    }
}
