// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a single-window video player built with the Iced GUI
//! framework.
//!
//! It plays a playlist of local video files with custom window chrome,
//! auto-hiding controls, keyboard shortcuts, fullscreen, window fitting to
//! the first video's aspect ratio, and decode-error recovery.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod player;
pub mod playlist;
pub mod ui;
pub mod window_fit;
