//! Timesheet configuration.
//!
//! Loaded from `~/.timesheet/config.toml`. Every key is optional; a missing
//! file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::infer::Weighting;

/// Timesheet configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// The dictated activity log.
    pub text_file: PathBuf,

    /// Where `from-text` writes parsed entries.
    pub draft_file: PathBuf,

    /// The sheet `infer` reads labeled and unlabeled rows from.
    pub log_sheet_file: PathBuf,

    /// Scoring scheme for task inference.
    pub weighting: Weighting,
}

impl Default for Config {
    fn default() -> Self {
        let text_file = dirs::home_dir().map_or_else(
            || PathBuf::from("timesheet.txt"),
            |h| h.join("timesheet.txt"),
        );
        Self {
            text_file,
            draft_file: PathBuf::from("res").join("draft.json"),
            log_sheet_file: PathBuf::from("res").join("log-sheet.json"),
            weighting: Weighting::Plain,
        }
    }
}

impl Config {
    /// Load config from `~/.timesheet/config.toml`, falling back to defaults.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file. A missing file yields defaults;
    /// an unreadable or invalid one is an error.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.timesheet/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".timesheet").join("config.toml"))
    }
}
