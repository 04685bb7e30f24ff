// SPDX-License-Identifier: MPL-2.0
//! Window sizing for the first loaded video.
//!
//! Computes a window geometry that shows the video at its intrinsic size when
//! it fits on screen, or scaled down preserving the aspect ratio of the video
//! area (window height minus the title bar) when it does not. The window is
//! re-centered around its previous visual center so resizing does not appear
//! to jump, and centered on the available screen area on first launch.

use iced::{Rectangle, Size};

/// Target window placement produced by [`fit_to_screen`].
///
/// Derived state only; recomputed at first-video-ready and never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl WindowGeometry {
    /// The outer window size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The top-left position.
    #[must_use]
    pub fn position(&self) -> iced::Point {
        iced::Point::new(self.x, self.y)
    }
}

/// Computes the window geometry for a video of intrinsic size `media`.
///
/// `title_bar_height` is the chrome added above the video area;
/// `screen_avail` is the usable screen area; `previous` is the window's
/// current bounds, or `None` on first launch.
///
/// The result never exceeds `screen_avail` in either dimension, and the
/// video area keeps the media's aspect ratio exactly under scaling.
///
/// Callers must guard against zero media dimensions; the aspect ratio is
/// undefined for them.
pub fn fit_to_screen(
    media: Size,
    title_bar_height: f32,
    screen_avail: Size,
    previous: Option<Rectangle>,
) -> WindowGeometry {
    debug_assert!(media.width > 0.0 && media.height > 0.0);

    let aspect = media.width / media.height;
    let mut new_width = media.width;
    let mut new_height = media.height + title_bar_height;

    let shrink_x = new_width / screen_avail.width;
    let shrink_y = new_height / screen_avail.height;
    if shrink_x > 1.0 || shrink_y > 1.0 {
        // Scale by the binding axis and recompute the other dimension from
        // the aspect ratio so the video area keeps its proportions exactly.
        if shrink_y > shrink_x {
            new_height /= shrink_y;
            new_width = (new_height - title_bar_height) * aspect;
        } else {
            new_width /= shrink_x;
            new_height = new_width / aspect + title_bar_height;
        }
    }

    let (x, y) = match previous {
        Some(old) => (
            old.x - (new_width - old.width) / 2.0,
            old.y - (new_height - old.height) / 2.0,
        ),
        None => (
            (screen_avail.width - new_width) / 2.0,
            (screen_avail.height - new_height) / 2.0,
        ),
    };

    WindowGeometry {
        width: new_width,
        height: new_height,
        x,
        y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE_BAR: f32 = 33.0;

    fn video_area_ratio(geometry: &WindowGeometry) -> f32 {
        (geometry.height - TITLE_BAR) / geometry.width
    }

    #[test]
    fn media_smaller_than_screen_keeps_intrinsic_size() {
        let geometry = fit_to_screen(
            Size::new(640.0, 480.0),
            TITLE_BAR,
            Size::new(1920.0, 1080.0),
            None,
        );
        assert_eq!(geometry.width, 640.0);
        assert_eq!(geometry.height, 480.0 + TITLE_BAR);
    }

    #[test]
    fn full_hd_on_small_screen_shrinks_within_bounds() {
        let geometry = fit_to_screen(
            Size::new(1920.0, 1080.0),
            TITLE_BAR,
            Size::new(1280.0, 800.0),
            None,
        );
        assert!(geometry.width <= 1280.0);
        assert!(geometry.height <= 800.0);

        // Video area (window minus title bar) keeps the 16:9 ratio.
        let expected = 1080.0 / 1920.0;
        assert!((video_area_ratio(&geometry) - expected).abs() < 1e-4);
    }

    #[test]
    fn width_bound_picks_horizontal_shrink() {
        // Wide media on a wide-enough-but-short screen: vertical shrink binds.
        let geometry = fit_to_screen(
            Size::new(1000.0, 1500.0),
            TITLE_BAR,
            Size::new(1600.0, 900.0),
            None,
        );
        assert!((geometry.height - 900.0).abs() < 1e-3);
        let expected = 1500.0 / 1000.0;
        assert!((((geometry.height - TITLE_BAR) / geometry.width) - expected).abs() < 1e-3);
    }

    #[test]
    fn output_never_exceeds_screen_for_various_inputs() {
        let screens = [
            Size::new(1280.0, 800.0),
            Size::new(1920.0, 1080.0),
            Size::new(1024.0, 600.0),
        ];
        let medias = [
            Size::new(3840.0, 2160.0),
            Size::new(720.0, 576.0),
            Size::new(1080.0, 1920.0),
        ];
        for screen in screens {
            for media in medias {
                let geometry = fit_to_screen(media, TITLE_BAR, screen, None);
                assert!(geometry.width <= screen.width + 1e-3);
                assert!(geometry.height <= screen.height + 1e-3);
            }
        }
    }

    #[test]
    fn recenters_around_previous_window_center() {
        let previous = Rectangle {
            x: 100.0,
            y: 50.0,
            width: 800.0,
            height: 600.0,
        };
        let geometry = fit_to_screen(
            Size::new(400.0, 300.0),
            TITLE_BAR,
            Size::new(1920.0, 1080.0),
            Some(previous),
        );
        // Old center must equal new center.
        let old_center_x = previous.x + previous.width / 2.0;
        let old_center_y = previous.y + previous.height / 2.0;
        let new_center_x = geometry.x + geometry.width / 2.0;
        let new_center_y = geometry.y + geometry.height / 2.0;
        assert!((old_center_x - new_center_x).abs() < 1e-3);
        assert!((old_center_y - new_center_y).abs() < 1e-3);
    }

    #[test]
    fn first_launch_centers_on_screen() {
        let geometry = fit_to_screen(
            Size::new(640.0, 480.0),
            TITLE_BAR,
            Size::new(1920.0, 1080.0),
            None,
        );
        assert!((geometry.x - (1920.0 - geometry.width) / 2.0).abs() < 1e-3);
        assert!((geometry.y - (1080.0 - geometry.height) / 2.0).abs() < 1e-3);
    }
}
