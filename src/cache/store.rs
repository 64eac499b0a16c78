//! Artifact store for persisting change tables to disk
//!
//! Provides an `ArtifactStore` that saves one JSON file per denomination set,
//! named from a configurable template, and loads it back on demand.

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::table::ChangeTable;
use crate::change::Denominations;

/// Placeholder replaced by the denomination key in file templates
pub const DENOMINATIONS_PLACEHOLDER: &str = "{denominations}";

/// Default file name template for artifacts
pub const DEFAULT_FILE_TEMPLATE: &str = "make_change_{denominations}.json";

/// Borrowed view of an artifact, used when writing
#[derive(Debug, Serialize)]
struct ArtifactRef<'a> {
    denominations: &'a Denominations,
    table: &'a ChangeTable,
    cached_at: DateTime<Utc>,
}

/// A change table as read back from disk
#[derive(Debug, Deserialize)]
pub struct Artifact {
    /// Denominations the table was computed for
    pub denominations: Denominations,
    /// The persisted table
    pub table: ChangeTable,
    /// When the artifact was written
    pub cached_at: DateTime<Utc>,
}

/// Reads, writes and removes change table artifacts
///
/// Artifacts live in an XDG-compliant cache directory (`~/.cache/makechange/`
/// on Linux) unless a directory is given explicitly.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    /// Directory where artifacts are stored
    cache_dir: PathBuf,
    /// File name template containing `{denominations}`
    file_template: String,
}

impl ArtifactStore {
    /// Creates a store in the platform cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "makechange")?;
        Some(Self::with_dir(project_dirs.cache_dir().to_path_buf()))
    }

    /// Creates a store rooted at a custom directory
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            file_template: DEFAULT_FILE_TEMPLATE.to_string(),
        }
    }

    /// Replaces the file name template
    ///
    /// Every occurrence of `{denominations}` is replaced by the denomination
    /// values joined with `-`. A template without the placeholder makes all
    /// sets share one file; loads then discard artifacts for other sets.
    pub fn with_file_template(mut self, template: impl Into<String>) -> Self {
        self.file_template = template.into();
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns the artifact path for a denomination set
    pub fn artifact_path(&self, denominations: &Denominations) -> PathBuf {
        let key: Vec<String> = denominations.values().iter().map(u64::to_string).collect();
        let file_name = self
            .file_template
            .replace(DENOMINATIONS_PLACEHOLDER, &key.join("-"));
        self.cache_dir.join(file_name)
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Writes the table for `denominations`, replacing any previous artifact
    ///
    /// # Returns
    /// * `Ok(path)` of the written artifact
    /// * `Err` if directory creation, encoding or file writing fails
    pub fn write(&self, denominations: &Denominations, table: &ChangeTable) -> io::Result<PathBuf> {
        self.ensure_dir()?;

        let artifact = ArtifactRef {
            denominations,
            table,
            cached_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&artifact)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let path = self.artifact_path(denominations);
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Reads the artifact for `denominations`
    ///
    /// Returns `None` if the file doesn't exist or cannot be parsed. Nothing
    /// is checked beyond JSON structure; callers validate the contents.
    pub fn read(&self, denominations: &Denominations) -> Option<Artifact> {
        let path = self.artifact_path(denominations);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no artifact on disk");
                return None;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "artifact unreadable");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(artifact) => Some(artifact),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "artifact is not valid JSON");
                None
            }
        }
    }

    /// Deletes the artifact for `denominations`
    ///
    /// # Returns
    /// * `Ok(true)` if a file was removed
    /// * `Ok(false)` if there was nothing to remove
    /// * `Err` for any other filesystem failure
    pub fn remove(&self, denominations: &Denominations) -> io::Result<bool> {
        match fs::remove_file(self.artifact_path(denominations)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
