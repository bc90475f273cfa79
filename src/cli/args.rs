//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the cut command
#[derive(Args, Debug)]
pub struct CutArgs {
    /// Input video file (mp4, mov, avi, mkv, webm)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Start time (HH:MM:SS or HH:MM:SS.mmm)
    #[arg(short, long)]
    pub start: String,

    /// End time (HH:MM:SS or HH:MM:SS.mmm)
    #[arg(short, long)]
    pub end: String,

    /// Output file path (default: cut_output.mp4)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Constant Rate Factor (0-51)
    #[arg(long)]
    pub crf: Option<u8>,

    /// Encoding preset
    #[arg(long)]
    pub preset: Option<String>,

    /// Check the output duration against the requested range
    #[arg(long)]
    pub verify: bool,

    /// Print the trim report as JSON
    #[arg(long)]
    pub json: bool,

    /// Configuration file path
    #[arg(long, env = "SUBCLIP_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
