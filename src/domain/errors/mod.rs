//! Error handling module for Subclip

use thiserror::Error;

/// Main error type for trim operations
#[derive(Error, Debug)]
pub enum CutError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// Container extension is not in the supported set
    #[error("Unsupported container format: {extension}. Supported: mp4, mov, avi, mkv, webm")]
    UnsupportedContainer { extension: String },

    /// Timestamp string does not match either accepted format
    #[error("Time must be in HH:MM:SS or HH:MM:SS.mmm format.")]
    InvalidTimeFormat { time: String },

    /// Start offset is not strictly before the end offset
    #[error("Start time ({start}) must be less than end time ({end}).")]
    InvalidTimeRange { start: String, end: String },

    /// Request construction error
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Media library initialization error
    #[error("Failed to initialize FFmpeg: {message}")]
    MediaInit { message: String },

    /// Media probe error
    #[error("Failed to probe media file: {message}")]
    Probe { message: String },

    /// Any failure from the media library during open, extract, or write
    #[error("Video export failed: {message}")]
    Export { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for trim operations
pub type CutResult<T> = std::result::Result<T, CutError>;
