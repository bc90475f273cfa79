//! Media file inspection

use std::path::Path;

use ffmpeg_next as ffmpeg;
use serde::Serialize;
use tracing::debug;

use crate::domain::errors::{CutError, CutResult};

/// Summary of a media file
#[derive(Debug, Clone, Serialize)]
pub struct MediaSummary {
    /// File path
    pub path: String,
    /// Container format name
    pub container: String,
    /// Duration in seconds
    pub duration: f64,
    /// Number of video streams
    pub video_streams: usize,
    /// Number of audio streams
    pub audio_streams: usize,
    /// File size in bytes
    pub file_size: u64,
}

/// Probe a media file for container, duration, and stream layout
pub fn inspect(path: &Path) -> CutResult<MediaSummary> {
    if !path.exists() {
        return Err(CutError::InputFileNotFound {
            path: path.display().to_string(),
        });
    }
    let file_size = std::fs::metadata(path)?.len();

    let ictx = ffmpeg::format::input(&path).map_err(|e| CutError::Probe {
        message: format!("Failed to open media file: {}", e),
    })?;

    let duration = if ictx.duration() > 0 {
        ictx.duration() as f64 / f64::from(ffmpeg::ffi::AV_TIME_BASE)
    } else {
        0.0
    };

    let mut video_streams = 0;
    let mut audio_streams = 0;
    for stream in ictx.streams() {
        match stream.parameters().medium() {
            ffmpeg::media::Type::Video => video_streams += 1,
            ffmpeg::media::Type::Audio => audio_streams += 1,
            _ => {}
        }
    }

    let summary = MediaSummary {
        path: path.display().to_string(),
        container: ictx.format().name().to_string(),
        duration,
        video_streams,
        audio_streams,
        file_size,
    };
    debug!(
        "Probed {}: {:.3}s, {} video / {} audio stream(s)",
        summary.path, summary.duration, summary.video_streams, summary.audio_streams
    );
    Ok(summary)
}
