//! Configuration loading
//!
//! Defaults are overridden by a `subclip.toml` file when present, and then
//! by CLI flags.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::errors::{CutError, CutResult};

/// Output filename used when none is configured; every successful trim
/// overwrites it
pub const DEFAULT_OUTPUT_FILENAME: &str = "cut_output.mp4";

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "subclip.toml";

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Output filename used when no --output is given
    pub output_filename: String,
    /// Constant rate factor for the H.264 encoder (0-51)
    pub crf: u8,
    /// Encoding preset
    pub preset: String,
    /// Duration tolerance for output verification, in milliseconds
    pub verify_tolerance_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            crf: 18,
            preset: "medium".to_string(),
            verify_tolerance_ms: 500,
        }
    }
}

impl AppConfig {
    /// Load configuration from the given file, or from `subclip.toml` in the
    /// working directory, or fall back to defaults
    pub fn load(path: Option<&Path>) -> CutResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> CutResult<Self> {
        info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| CutError::Config {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        toml::from_str(&content).map_err(|e| CutError::Config {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })
    }

    fn validate(&self) -> CutResult<()> {
        if self.crf > 51 {
            return Err(CutError::Config {
                message: format!("CRF value {} is invalid (must be 0-51)", self.crf),
            });
        }
        if self.output_filename.is_empty() {
            return Err(CutError::Config {
                message: "Output filename cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
