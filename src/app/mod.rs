// Trim use case orchestration

use std::path::Path;
use std::time::Instant;

use tracing::{error, info};

use crate::domain::errors::CutResult;
use crate::domain::model::{CutRange, OutputArtifact, TrimRequest};
use crate::engine::{ClipExporter, ExportSettings, TrimPhase};
use crate::ingest::StagedSource;
use crate::timecode;

/// Orchestrates one trim request against an injected exporter
pub struct TrimInteractor<'a> {
    exporter: &'a dyn ClipExporter,
}

/// Outcome of a completed trim
#[derive(Debug)]
pub struct TrimOutcome {
    pub artifact: OutputArtifact,
    pub range: CutRange,
    pub phase: TrimPhase,
    pub elapsed_seconds: f64,
}

impl<'a> TrimInteractor<'a> {
    /// Create a new interactor with the injected exporter
    pub fn new(exporter: &'a dyn ClipExporter) -> Self {
        Self { exporter }
    }

    /// Run the full stage, parse, validate, export sequence
    ///
    /// All input validation happens before the exporter is consulted; a
    /// malformed timestamp or a reversed range never starts an export. The
    /// staged copy of the source is removed on every exit path.
    pub fn execute(
        &self,
        input: &Path,
        start: &str,
        end: &str,
        settings: &ExportSettings,
    ) -> CutResult<TrimOutcome> {
        let started = Instant::now();

        let staged = StagedSource::from_path(input)?;

        let start_offset = timecode::parse_timestamp(start)?;
        let end_offset = timecode::parse_timestamp(end)?;
        let range = CutRange::new(start_offset, end_offset)?;
        let request = TrimRequest::new(staged.path(), range)?;

        info!(
            "Trimming {} from {} to {}",
            input.display(),
            range.start(),
            range.end()
        );

        match self.exporter.export(&request, settings) {
            Ok(artifact) => {
                info!(
                    "Wrote {} ({} bytes)",
                    artifact.path.display(),
                    artifact.file_size
                );
                Ok(TrimOutcome {
                    artifact,
                    range,
                    phase: TrimPhase::Done,
                    elapsed_seconds: started.elapsed().as_secs_f64(),
                })
            }
            Err(e) => {
                error!("Trim failed: {}", e);
                Err(e)
            }
        }
    }
}
