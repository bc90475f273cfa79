//! Subclip video trimmer library
//!
//! Cuts the `[start, end)` range out of a video file and re-encodes it to an
//! H.264/AAC MP4, the same operation the `subclip` binary exposes on the
//! command line. Timestamps are entered as `HH:MM:SS` or `HH:MM:SS.ffffff`.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod ingest;
pub mod output;
pub mod probe;
pub mod timecode;

// Re-export commonly used types
pub use domain::errors::{CutError, CutResult};
pub use domain::model::{CutRange, OutputArtifact, TimeOffset, TrimRequest};

/// Initialize the media library, once at process start
pub fn init() -> CutResult<()> {
    ffmpeg_next::init().map_err(|e| CutError::MediaInit {
        message: e.to_string(),
    })?;
    Ok(())
}
