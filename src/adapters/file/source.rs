//! Snapshot documents on disk
//!
//! A snapshot document mirrors the in-memory [`Snapshot`]:
//!
//! ```text
//! {
//!   "rules": {
//!     "ConfigurationGeneral": {
//!       "properties": { "TargetFrameworkIdentifier": ".NETCoreApp" }
//!     },
//!     "SupportedNETCoreAppTargetFramework": {
//!       "items": [
//!         { "key": ".NETCoreApp,Version=v8.0", "properties": { "DisplayName": ".NET 8.0" } }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Item order in the document is preserved.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::core::models::{Snapshot, SnapshotError};
use crate::core::ports::SnapshotSource;

/// Encoding of a snapshot document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotFormat {
    /// JSON (default)
    #[default]
    Json,
    /// TOML
    Toml,
}

impl SnapshotFormat {
    /// Pick the format from a file extension, defaulting to JSON
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Parse a snapshot document
///
/// # Errors
///
/// Returns [`SnapshotError::Parse`] if the content is not a valid document.
pub fn parse_snapshot(content: &str, format: SnapshotFormat) -> Result<Snapshot, SnapshotError> {
    match format {
        SnapshotFormat::Json => {
            serde_json::from_str(content).map_err(|e| SnapshotError::Parse(e.to_string()))
        },
        SnapshotFormat::Toml => {
            toml::from_str(content).map_err(|e| SnapshotError::Parse(e.to_string()))
        },
    }
}

/// Reads a snapshot from a document on disk
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
    format: SnapshotFormat,
}

impl FileSnapshotSource {
    /// Create a source, inferring the format from the extension
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = SnapshotFormat::from_path(&path);
        Self { path, format }
    }

    /// Create a source with an explicit format
    #[must_use]
    pub fn with_format(path: impl Into<PathBuf>, format: SnapshotFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Format of the document
    #[must_use]
    pub const fn format(&self) -> SnapshotFormat {
        self.format
    }
}

impl SnapshotSource for FileSnapshotSource {
    fn load(&self) -> anyhow::Result<Snapshot> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read snapshot {}", self.path.display()))?;
        let snapshot = parse_snapshot(&content, self.format)
            .with_context(|| format!("failed to parse snapshot {}", self.path.display()))?;
        debug!("loaded snapshot {} ({:?})", self.path.display(), self.format);
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
