//! Subclip command-line entry point
//!
//! Trims the range between two timestamps out of a video file and writes an
//! H.264/AAC MP4:
//!
//! ```bash
//! subclip cut --input movie.mp4 --start 00:01:00 --end 00:02:00
//! subclip inspect --input movie.mp4
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use subclip_cli::cli::{commands, Cli, Commands};

fn main() -> ExitCode {
    // One-time process setup: logging first, then the media library
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = subclip_cli::init() {
        error!("{}", e);
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cut(args) => commands::cut(args),
        Commands::Inspect(args) => commands::inspect(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
