//! Core trim engine module

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::errors::CutResult;
use crate::domain::model::{OutputArtifact, TrimRequest};

pub mod export;

/// Encoder settings for a single export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Final output file path
    pub output_path: PathBuf,
    /// Constant rate factor (0-51, lower is higher quality)
    pub crf: u8,
    /// Encoding speed preset
    pub preset: String,
}

/// Seam to the media-export library
///
/// The pipeline only ever asks the library one thing: encode the `[start,
/// end)` range of the request's source into the configured output file.
pub trait ClipExporter {
    fn export(
        &self,
        request: &TrimRequest,
        settings: &ExportSettings,
    ) -> CutResult<OutputArtifact>;
}

/// Lifecycle of a single trim request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrimPhase {
    /// Waiting for input
    Idle,
    /// Export in progress
    Trimming,
    /// Artifact written
    Done,
    /// Export aborted with an error
    Failed,
}
