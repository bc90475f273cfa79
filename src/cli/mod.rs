//! CLI module
//!
//! Command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// Subclip video trimmer
///
/// Cuts the range between two timestamps out of a video file and re-encodes
/// it to an H.264/AAC MP4.
#[derive(Parser)]
#[command(name = "subclip")]
#[command(about = "Cut a clip out of a video file")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Trim the range between two timestamps out of a video file
    Cut(args::CutArgs),
    /// Inspect media file information
    Inspect(args::InspectArgs),
}
