//! Command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::app::TrimInteractor;
use crate::cli::args::{CutArgs, InspectArgs};
use crate::config::AppConfig;
use crate::engine::export::FfmpegExporter;
use crate::engine::{ExportSettings, TrimPhase};
use crate::output::{self, VerifyReport};
use crate::probe;

/// Machine-readable report for a completed cut
#[derive(Debug, Serialize)]
struct CutReport {
    phase: TrimPhase,
    output_path: String,
    file_size: u64,
    clip_duration: f64,
    elapsed_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    verification: Option<VerifyReport>,
}

/// Execute the cut command
pub fn cut(args: CutArgs) -> Result<()> {
    let config =
        AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    let settings = ExportSettings {
        output_path: args
            .output
            .clone()
            .unwrap_or_else(|| config.output_filename.clone().into()),
        crf: args.crf.unwrap_or(config.crf),
        preset: args.preset.clone().unwrap_or_else(|| config.preset.clone()),
    };

    info!("Starting cut operation");
    info!("Input: {}", args.input.display());
    info!("Start: {}", args.start);
    info!("End: {}", args.end);
    info!("Output: {}", settings.output_path.display());

    let exporter = FfmpegExporter::new();
    let interactor = TrimInteractor::new(&exporter);
    let outcome = interactor.execute(&args.input, &args.start, &args.end, &settings)?;

    let verification = if args.verify {
        Some(output::verify(
            &outcome.artifact,
            &outcome.range,
            config.verify_tolerance_ms,
        )?)
    } else {
        None
    };

    let report = CutReport {
        phase: outcome.phase,
        output_path: outcome.artifact.path.display().to_string(),
        file_size: outcome.artifact.file_size,
        clip_duration: outcome.range.duration(),
        elapsed_seconds: outcome.elapsed_seconds,
        verification,
    };

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize cut report")?;
        println!("{}", json);
    } else {
        println!(
            "Wrote {} ({:.3}s clip) in {:.2}s",
            report.output_path, report.clip_duration, report.elapsed_seconds
        );
        if let Some(check) = &report.verification {
            if check.passed {
                println!("Verification passed: output duration {:.3}s", check.actual_duration);
            } else {
                println!(
                    "Verification failed: expected {:.3}s, got {:.3}s",
                    check.expected_duration, check.actual_duration
                );
            }
        }
    }

    if let Some(check) = &report.verification {
        if !check.passed {
            anyhow::bail!("Output verification failed");
        }
    }

    Ok(())
}

/// Execute the inspect command
pub fn inspect(args: InspectArgs) -> Result<()> {
    let summary = probe::inspect(&args.input).context("Failed to inspect input file")?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&summary).context("Failed to serialize media summary")?;
        println!("{}", json);
    } else {
        println!("File: {}", summary.path);
        println!("Container: {}", summary.container);
        println!("Duration: {:.3}s", summary.duration);
        println!(
            "Streams: {} video, {} audio",
            summary.video_streams, summary.audio_streams
        );
        println!("Size: {} bytes", summary.file_size);
    }

    Ok(())
}
