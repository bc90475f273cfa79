//! Source file staging
//!
//! The host hands over an uploaded video file. The trim pipeline works on a
//! private copy under a temporary directory and removes that copy when the
//! request finishes, on success and failure alike.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info};

use crate::domain::errors::{CutError, CutResult};

/// Container formats accepted for upload
pub const SUPPORTED_CONTAINERS: [&str; 5] = ["mp4", "mov", "avi", "mkv", "webm"];

/// A staged copy of the source file, removed when dropped
pub struct StagedSource {
    path: PathBuf,
    // Owns the staging directory; dropping it deletes the copy
    _dir: TempDir,
}

impl StagedSource {
    /// Write source bytes to local storage under their original filename
    pub fn stage<R: Read>(reader: &mut R, file_name: &str) -> CutResult<Self> {
        validate_container(file_name)?;

        let dir = TempDir::new()?;
        let path = dir.path().join(file_name);
        let mut file = File::create(&path)?;
        let bytes = io::copy(reader, &mut file)?;
        debug!("Staged {} bytes at {}", bytes, path.display());

        Ok(Self { path, _dir: dir })
    }

    /// Stage an existing file from disk
    pub fn from_path(source: &Path) -> CutResult<Self> {
        let file_name = source
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| CutError::InputFileNotFound {
                path: source.display().to_string(),
            })?
            .to_string();

        let mut file = File::open(source).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CutError::InputFileNotFound {
                path: source.display().to_string(),
            },
            _ => CutError::Io(e),
        })?;

        info!("Staging source file {}", source.display());
        Self::stage(&mut file, &file_name)
    }

    /// Path of the staged copy
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn validate_container(file_name: &str) -> CutResult<()> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if SUPPORTED_CONTAINERS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(CutError::UnsupportedContainer { extension })
    }
}
