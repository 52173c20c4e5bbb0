//! File I/O for the log, the draft sheet, and the log sheet.
//!
//! Relative paths resolve against the storage root (the working directory
//! when run from the CLI). Sheets are JSON arrays of row objects keyed by
//! column name:
//!
//! ```text
//! [{"Task": "website", "Remark": "implement email subscribe form"}, ...]
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::model::{DraftRow, LogEntry, SheetRow};

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// File access rooted at a directory.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage rooted at the current working directory.
    pub fn current() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Reads the raw activity log.
    pub fn read_log(&self, path: &Path) -> Result<String> {
        self.read(path)
    }

    /// Writes entries as a draft sheet, creating parent directories.
    ///
    /// Returns the resolved path written to.
    pub fn write_draft(&self, path: &Path, entries: &[LogEntry]) -> Result<PathBuf> {
        let rows: Vec<DraftRow> = entries.iter().map(DraftRow::from).collect();
        let json = serde_json::to_string_pretty(&rows)?;
        self.write(path, &json)
    }

    /// Reads the log sheet rows.
    pub fn read_sheet(&self, path: &Path) -> Result<Vec<SheetRow>> {
        let json = self.read(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Writes any serializable report as pretty JSON.
    pub fn write_json<T: serde::Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(value)?;
        self.write(path, &json)
    }

    fn read(&self, path: &Path) -> Result<String> {
        let path = self.resolve(path);
        if !path.is_file() {
            return Err(StorageError::NotFound(path));
        }
        info!(path = %path.display(), "reading from file");
        Ok(fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<PathBuf> {
        let path = self.resolve(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        info!(path = %path.display(), "writing to file");
        fs::write(&path, contents)?;
        Ok(path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}
