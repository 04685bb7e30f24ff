// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Navigation, the generation-guarded metadata handshake, the one-time
//! first-video window fit, the decode-error recovery gesture, and the window
//! chrome commands all funnel through here.

use super::{App, Message};
use crate::error::VideoError;
use crate::media::{probe, VideoMetadata};
use crate::player::{Completion, LoadGeneration, PlaybackState, PositionClock};
use crate::playlist::Direction;
use crate::ui::{chrome, controls, error_banner, overlay};
use crate::window_fit;
use iced::{event, keyboard, mouse, window, Rectangle, Size, Task};
use std::time::Duration;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Chrome(msg) => handle_chrome(app, chrome::update(msg)),
        Message::Controls(msg) => handle_controls(app, controls::update(msg)),
        Message::ErrorBanner(msg) => handle_banner(app, msg),
        Message::MediaLoaded { generation, result } => {
            handle_media_loaded(app, generation, result)
        }
        Message::WindowBoundsFetched { position, size } => {
            handle_window_bounds(app, position, size)
        }
        Message::Tick(now) => handle_tick(app, now),
        Message::RawEvent { window, event } => handle_raw_event(app, window, event),
        Message::WindowCloseRequested(id) => close_and_persist(app, id),
    }
}

/// Unloads whatever is attached and starts loading the current playlist
/// entry. The returned task resolves to `MediaLoaded` carrying the freshly
/// minted generation.
pub(super) fn reload_current(app: &mut App) -> Task<Message> {
    // Leaving the error state re-arms the inactivity watcher.
    app.banner = None;
    app.overlay.set_disabled(false);
    app.playback = PlaybackState::Stopped;
    app.clock = None;

    let generation = app.session.begin_load();
    let video = app.playlist.current();
    log::info!(
        "loading {} ({}/{})",
        video.display_name,
        app.playlist.current_index() + 1,
        app.playlist.len()
    );

    let path = video.path.clone();
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || probe::probe(&path))
                .await
                .unwrap_or_else(|e| Err(VideoError::Other(format!("probe task failed: {e}"))))
        },
        move |result| Message::MediaLoaded { generation, result },
    )
}

/// Records the current playback position in the resume store (in memory).
fn remember_position(app: &mut App) {
    if let Some(clock) = &app.clock {
        let path = app.playlist.current().path.clone();
        app.resume
            .set_position(&path, clock.position().as_secs_f64());
    }
}

fn navigate(app: &mut App, direction: Direction) -> Task<Message> {
    remember_position(app);
    if app.playlist.advance(direction).is_none() {
        // Edge of the list: silently ignored, no wraparound.
        return Task::none();
    }
    reload_current(app)
}

fn handle_media_loaded(
    app: &mut App,
    generation: LoadGeneration,
    result: Result<VideoMetadata, VideoError>,
) -> Task<Message> {
    match app.session.complete_load(generation, result) {
        Completion::Stale => Task::none(),
        Completion::Failed => {
            enter_error_state(app);
            Task::none()
        }
        Completion::Ready => {
            let Some(metadata) = app.session.metadata() else {
                return Task::none();
            };
            let duration = Duration::from_secs_f64(metadata.duration_secs.max(0.0));
            let saved = app
                .resume
                .position_for(&app.playlist.current().path)
                .map(Duration::from_secs_f64);
            app.clock = Some(match saved {
                Some(position) => PositionClock::resumed_at(duration, position),
                None => PositionClock::new(duration),
            });

            if !app.window_fitted {
                fetch_window_bounds(app)
            } else {
                // Navigation implies intent: play immediately.
                start_playback(app);
                Task::none()
            }
        }
    }
}

/// Puts the app in the disabled error state. Idempotent: a second failure
/// while already failed neither replaces the banner nor re-disables anything.
fn enter_error_state(app: &mut App) {
    app.playback = PlaybackState::Stopped;
    app.clock = None;
    // A failed video restarts from the beginning once recovered.
    let path = app.playlist.current().path.clone();
    app.resume.set_position(&path, 0.0);
    if app.banner.is_none() {
        if let Some(error) = app.session.error() {
            app.banner = Some(error_banner::State::new(error));
        }
    }
    app.overlay.set_disabled(true);
}

/// Asks the runtime for the window's current bounds so the first-video fit
/// can re-center around them.
fn fetch_window_bounds(app: &App) -> Task<Message> {
    let Some(id) = app.window_id else {
        // No window event seen yet; skip the fit rather than block playback.
        log::warn!("window id unknown at first-video-ready; skipping window fit");
        return Task::done(Message::WindowBoundsFetched {
            position: None,
            size: Size::ZERO,
        });
    };

    window::position(id).then(move |position| {
        window::size(id).map(move |size| Message::WindowBoundsFetched { position, size })
    })
}

fn handle_window_bounds(
    app: &mut App,
    position: Option<iced::Point>,
    size: Size,
) -> Task<Message> {
    if autoplay_first(app) {
        start_playback(app);
    }
    app.window_fitted = true;

    let Some(metadata) = app.session.metadata() else {
        return Task::none();
    };
    // Probe rejects zero dimensions; the aspect ratio is well-defined here.
    let media = Size::new(metadata.width as f32, metadata.height as f32);

    let Some(id) = app.window_id else {
        return Task::none();
    };

    let previous = position.map(|p| Rectangle {
        x: p.x,
        y: p.y,
        width: size.width,
        height: size.height,
    });
    let title_bar = app
        .config
        .title_bar_height
        .unwrap_or(crate::config::DEFAULT_TITLE_BAR_HEIGHT);
    let geometry = window_fit::fit_to_screen(media, title_bar, app.screen_avail(), previous);
    log::info!(
        "fitting window to {}x{} at ({}, {})",
        geometry.width,
        geometry.height,
        geometry.x,
        geometry.y
    );

    Task::batch([
        window::resize(id, geometry.size()),
        window::move_to(id, geometry.position()),
    ])
}

fn autoplay_first(app: &App) -> bool {
    app.config.autoplay.unwrap_or(true)
}

fn start_playback(app: &mut App) {
    if !app.session.is_ready() {
        return;
    }
    app.playback = PlaybackState::Playing;
    if let Some(clock) = &mut app.clock {
        clock.play();
    }
}

fn toggle_playback(app: &mut App) {
    if !app.session.is_ready() {
        return;
    }
    app.playback = app.playback.toggled();
    if let Some(clock) = &mut app.clock {
        if app.playback.is_playing() {
            clock.play();
        } else {
            clock.pause();
        }
    }
}

fn handle_chrome(app: &mut App, event: chrome::Event) -> Task<Message> {
    let Some(id) = app.window_id else {
        return Task::none();
    };
    match event {
        chrome::Event::Minimize => window::minimize(id, true),
        chrome::Event::ToggleMaximize => {
            app.maximized = !app.maximized;
            window::maximize(id, app.maximized)
        }
        chrome::Event::Close => close_and_persist(app, id),
    }
}

fn handle_controls(app: &mut App, event: controls::Event) -> Task<Message> {
    match event {
        controls::Event::TogglePlayback => {
            toggle_playback(app);
            Task::none()
        }
        controls::Event::Previous => navigate(app, Direction::Backward),
        controls::Event::Next => navigate(app, Direction::Forward),
    }
}

fn handle_banner(app: &mut App, msg: error_banner::Message) -> Task<Message> {
    match msg {
        error_banner::Message::Reload => reload_current(app),
        other => {
            if let Some(banner) = &mut app.banner {
                banner.handle(other);
            }
            Task::none()
        }
    }
}

fn handle_tick(app: &mut App, _now: std::time::Instant) -> Task<Message> {
    if app.playback.is_playing() {
        // A deleted or unmounted file cannot keep playing; surface it the
        // same way a decode failure is.
        if !app.playlist.current().path.exists() {
            app.session.fail_playback(VideoError::IoError(
                "video file is no longer readable".to_string(),
            ));
            enter_error_state(app);
            return Task::none();
        }

        // End of media: restart when looping, stop otherwise.
        if let Some(clock) = &mut app.clock {
            if clock.position() >= clock.duration() && clock.duration() > Duration::ZERO {
                if app.looping {
                    clock.seek_to(Duration::ZERO);
                } else {
                    clock.pause();
                    app.playback = PlaybackState::Stopped;
                }
            }
        }
    }

    app.overlay.handle(overlay::Message::CheckTimeout);
    Task::none()
}

fn handle_raw_event(
    app: &mut App,
    window_id: window::Id,
    event: event::Event,
) -> Task<Message> {
    if app.window_id.is_none() {
        app.window_id = Some(window_id);
    }

    // Tracked continuously so Ctrl+click can read the modifier state; mouse
    // events do not carry modifiers themselves.
    if let event::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) = &event {
        app.modifiers = *modifiers;
        return Task::none();
    }

    // Error state: any unmodified key or click reloads the current video and
    // resumes. Control shortcuts (modified keys) are ignored so they keep
    // their usual meaning.
    if app.session.is_failed() {
        return match &event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { modifiers, .. })
                if !modifiers.control()
                    && !modifiers.alt()
                    && !modifiers.shift()
                    && !modifiers.logo() =>
            {
                reload_current(app)
            }
            event::Event::Mouse(mouse::Event::ButtonPressed(_)) => reload_current(app),
            _ => Task::none(),
        };
    }

    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
            keyboard::Key::Named(keyboard::key::Named::Space) => {
                toggle_playback(app);
                Task::none()
            }
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                // Escape only ever leaves fullscreen.
                set_fullscreen(app, false)
            }
            keyboard::Key::Named(keyboard::key::Named::F11) => {
                let desired = !app.fullscreen;
                set_fullscreen(app, desired)
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                navigate(app, Direction::Forward)
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                navigate(app, Direction::Backward)
            }
            _ => Task::none(),
        },
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            app.overlay.handle(overlay::Message::MouseMoved(position));
            Task::none()
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            // A click on the video surface toggles playback; clicks on
            // buttons are captured by the widgets and never arrive here.
            app.overlay.handle(overlay::Message::Interaction);
            if app.modifiers.control() {
                // Ctrl+click toggles looped playback instead.
                app.looping = !app.looping;
                log::info!("loop mode {}", if app.looping { "on" } else { "off" });
            } else {
                toggle_playback(app);
            }
            Task::none()
        }
        _ => Task::none(),
    }
}

/// Updates fullscreen mode to the desired state.
fn set_fullscreen(app: &mut App, desired: bool) -> Task<Message> {
    if app.fullscreen == desired {
        return Task::none();
    }

    let Some(id) = app.window_id else {
        return Task::none();
    };

    app.fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(id, mode)
}

/// Persists the playback position and closes the window.
fn close_and_persist(app: &mut App, id: window::Id) -> Task<Message> {
    remember_position(app);
    if let Some(warning) = app.resume.save_to(app.data_dir.clone()) {
        log::warn!("{warning}");
    }
    window::close(id)
}
