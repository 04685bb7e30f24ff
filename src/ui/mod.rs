// SPDX-License-Identifier: MPL-2.0
//! UI subcomponents: window chrome, playback controls, error banner, and the
//! inactivity overlay.

pub mod chrome;
pub mod controls;
pub mod error_banner;
pub mod overlay;
