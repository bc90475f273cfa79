//! Output artifact verification

use serde::Serialize;
use tracing::info;

use crate::domain::errors::CutResult;
use crate::domain::model::{CutRange, OutputArtifact};
use crate::probe;

/// Result of checking an artifact against the requested range
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Expected clip duration in seconds
    pub expected_duration: f64,
    /// Duration reported by the container
    pub actual_duration: f64,
    /// Absolute duration difference in milliseconds
    pub duration_difference_ms: u32,
    /// Duration within tolerance
    pub duration_ok: bool,
    /// Artifact is non-empty
    pub size_ok: bool,
    /// Overall verdict
    pub passed: bool,
}

/// Verify that the artifact matches the requested cut range
pub fn verify(
    artifact: &OutputArtifact,
    range: &CutRange,
    tolerance_ms: u32,
) -> CutResult<VerifyReport> {
    let summary = probe::inspect(&artifact.path)?;

    let expected = range.duration();
    let difference = (summary.duration - expected).abs();
    let duration_ok = difference <= f64::from(tolerance_ms) / 1000.0;
    let size_ok = artifact.file_size > 0;

    let report = VerifyReport {
        expected_duration: expected,
        actual_duration: summary.duration,
        duration_difference_ms: (difference * 1000.0) as u32,
        duration_ok,
        size_ok,
        passed: duration_ok && size_ok,
    };

    info!(
        "Verification {}: expected {:.3}s, got {:.3}s",
        if report.passed { "passed" } else { "failed" },
        expected,
        summary.duration
    );
    Ok(report)
}
