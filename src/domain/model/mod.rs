// Domain models - per-request value objects

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::errors::{CutError, CutResult};
use crate::timecode;

/// Offset into a media file, in non-negative seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeOffset {
    pub seconds: f64,
}

impl TimeOffset {
    /// Create a new TimeOffset from seconds
    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    pub fn as_seconds(&self) -> f64 {
        self.seconds
    }

    /// Convert to Duration
    pub fn to_duration(&self) -> Duration {
        Duration::from_secs_f64(self.seconds)
    }
}

impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", timecode::format_timestamp(self.seconds))
    }
}

/// Half-open cut range `[start, end)` within the source file
///
/// Construction enforces start < end, so a reversed or empty range can
/// never reach the export step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutRange {
    start: TimeOffset,
    end: TimeOffset,
}

impl CutRange {
    /// Create a new cut range, rejecting start >= end
    pub fn new(start: TimeOffset, end: TimeOffset) -> CutResult<Self> {
        if start.seconds >= end.seconds {
            return Err(CutError::InvalidTimeRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeOffset {
        self.start
    }

    pub fn end(&self) -> TimeOffset {
        self.end
    }

    /// Length of the range in seconds
    pub fn duration(&self) -> f64 {
        self.end.seconds - self.start.seconds
    }
}

/// A single trim request: source file plus validated cut range
#[derive(Debug, Clone)]
pub struct TrimRequest {
    source: PathBuf,
    range: CutRange,
}

impl TrimRequest {
    /// Create a new trim request
    pub fn new(source: impl Into<PathBuf>, range: CutRange) -> CutResult<Self> {
        let source = source.into();
        if source.as_os_str().is_empty() {
            return Err(CutError::InvalidRequest {
                message: "Source file path cannot be empty".to_string(),
            });
        }
        Ok(Self { source, range })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn range(&self) -> &CutRange {
        &self.range
    }
}

/// A freshly written output file
#[derive(Debug, Clone)]
pub struct OutputArtifact {
    /// Final output path
    pub path: PathBuf,
    /// Size of the written file in bytes
    pub file_size: u64,
}

impl OutputArtifact {
    pub fn new(path: PathBuf, file_size: u64) -> Self {
        Self { path, file_size }
    }
}

#[cfg(test)]
mod tests;
