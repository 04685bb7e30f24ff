// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the playlist, the load session, and the UI
//! subcomponents together and translates messages into side effects like
//! window commands or metadata probes. Policy decisions (window fit timing,
//! error recovery gestures, resume persistence) stay close to the update
//! loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
pub mod resume;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, Config, DEFAULT_OVERLAY_TIMEOUT_SECS, DEFAULT_SCREEN_AVAIL_HEIGHT,
    DEFAULT_SCREEN_AVAIL_WIDTH,
};
use crate::player::{PlaybackState, PositionClock, Session};
use crate::playlist::Playlist;
use crate::ui::{error_banner, overlay};
use iced::{keyboard, window, Element, Size, Subscription, Task, Theme};
use resume::ResumeStore;
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 240;

/// Root Iced application state.
pub struct App {
    playlist: Playlist,
    session: Session,
    playback: PlaybackState,
    /// Position clock for the attached video; present once metadata is known.
    clock: Option<PositionClock>,
    /// Error banner state; present exactly while the session is failed.
    banner: Option<error_banner::State>,
    overlay: overlay::State,
    resume: ResumeStore,
    config: Config,
    fullscreen: bool,
    maximized: bool,
    /// Restart the current video at end-of-media instead of stopping.
    /// Toggled by Ctrl+click on the stage.
    looping: bool,
    /// Keyboard modifier state, tracked from `ModifiersChanged` events.
    modifiers: keyboard::Modifiers,
    window_id: Option<window::Id>,
    /// The window is fitted to the video exactly once, at first-video-ready.
    window_fitted: bool,
    /// Data directory override from the launcher, if any.
    data_dir: Option<PathBuf>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("playlist_index", &self.playlist.current_index())
            .field("phase", self.session.phase())
            .field("playback", &self.playback)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the first video's
    /// metadata probe.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let data_dir = flags.data_dir.map(PathBuf::from);

        let (resume, resume_warning) = ResumeStore::load_from(data_dir.clone());
        if let Some(warning) = resume_warning {
            log::warn!("{warning}");
        }

        let playlist = Playlist::new(flags.videos)
            .expect("main guarantees a non-empty playlist");

        let overlay_timeout = Duration::from_secs(
            config
                .overlay_timeout_secs
                .unwrap_or(DEFAULT_OVERLAY_TIMEOUT_SECS),
        );

        let mut app = App {
            playlist,
            session: Session::new(),
            playback: PlaybackState::Stopped,
            clock: None,
            banner: None,
            overlay: overlay::State::new(overlay_timeout),
            resume,
            config,
            fullscreen: false,
            maximized: false,
            looping: false,
            modifiers: keyboard::Modifiers::default(),
            window_id: None,
            window_fitted: false,
            data_dir,
        };

        // Play the first video: position zero, probe in flight.
        let task = update::reload_current(&mut app);
        (app, task)
    }

    fn title(&self) -> String {
        format!("{} - IcedReel", self.playlist.current().display_name)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// The usable screen area the first-video fit must stay inside.
    ///
    /// Iced has no monitor geometry query, so this comes from configuration
    /// with a conservative default work area.
    pub(crate) fn screen_avail(&self) -> Size {
        Size::new(
            self.config
                .screen_avail_width
                .unwrap_or(DEFAULT_SCREEN_AVAIL_WIDTH),
            self.config
                .screen_avail_height
                .unwrap_or(DEFAULT_SCREEN_AVAIL_HEIGHT),
        )
    }
}
