// SPDX-License-Identifier: MPL-2.0
//! Metadata probing via FFmpeg.
//!
//! Reads container metadata (dimensions, duration, audio presence) without
//! decoding frames. This is the "metadata-ready" point of a load: once the
//! probe returns, the intrinsic video size is known and the window can be
//! fitted around it.

use crate::error::VideoError;
use crate::media::{is_supported_video, VideoMetadata};
use std::path::Path;
use std::sync::Once;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// Safe to call multiple times; initialization happens once. The FFmpeg log
/// level is lowered to ERROR to suppress noisy container warnings.
pub fn init_ffmpeg() -> Result<(), VideoError> {
    let mut init_result: Result<(), VideoError> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(VideoError::Other(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Extracts video metadata (dimensions, duration, FPS, audio presence).
///
/// Opens the file and reads container metadata only; no frames are decoded.
/// Errors are categorized into [`VideoError`] variants so the UI can show a
/// meaningful banner.
pub fn probe<P: AsRef<Path>>(path: P) -> Result<VideoMetadata, VideoError> {
    let path = path.as_ref();

    if !is_supported_video(path) {
        return Err(VideoError::UnsupportedFormat);
    }

    init_ffmpeg()?;

    let ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| VideoError::from_message(&format!("Failed to open video file: {e}")))?;

    let video_stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(VideoError::NoVideoStream)?;

    // Create a decoder context just to read the stream dimensions.
    let context_decoder =
        ffmpeg_next::codec::context::Context::from_parameters(video_stream.parameters())
            .map_err(|e| VideoError::from_message(&format!("Failed to create codec context: {e}")))?;
    let decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| VideoError::from_message(&format!("Failed to create video decoder: {e}")))?;

    let width = decoder.width();
    let height = decoder.height();
    if width == 0 || height == 0 {
        return Err(VideoError::CorruptedFile);
    }

    // Duration in stream time_base units, falling back to container duration.
    let duration_secs = if video_stream.duration() > 0 {
        let time_base = video_stream.time_base();
        video_stream.duration() as f64 * f64::from(time_base.numerator())
            / f64::from(time_base.denominator())
    } else if ictx.duration() > 0 {
        ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
    } else {
        0.0
    };

    let fps = {
        let frame_rate = video_stream.avg_frame_rate();
        if frame_rate.denominator() != 0 {
            f64::from(frame_rate.numerator()) / f64::from(frame_rate.denominator())
        } else {
            0.0
        }
    };

    let has_audio = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .is_some();

    Ok(VideoMetadata {
        width,
        height,
        duration_secs,
        fps,
        has_audio,
    })
}
