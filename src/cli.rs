//! CLI interface for the timesheet tools.
//!
//! Two independent batch commands:
//!
//! - `timesheet from-text`: parse the dictated log into a draft sheet.
//! - `timesheet infer`: suggest tasks for log sheet rows that have none.
//!
//! Paths default to the values in `~/.timesheet/config.toml`.

mod format;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::config::Config;
use crate::infer::{self, Weighting};
use crate::parser;
use crate::storage::Storage;

use format::format_suggestions;

/// Timesheet: turn a dictated activity log into time records.
#[derive(Debug, Parser)]
#[command(name = "timesheet", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r"Workflow:
  1. Dictate work into ~/timesheet.txt: a `---` line, the task name,
     `date` output for start and end, then what was done.
  2. timesheet from-text
     → writes res/draft.json
  3. Copy the draft rows into res/log-sheet.json, leaving Task empty where unsure.
  4. timesheet infer
     → prints ranked task candidates for every row without a task";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse the activity log into draft entries.
    ///
    /// Any malformed block aborts the run; nothing is written.
    FromText {
        /// Log file to read (defaults to `text-file` from config).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Draft file to write (defaults to `draft-file` from config).
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Suggest tasks for rows without one.
    ///
    /// Learns from rows that have a task. Suggestions are printed for review;
    /// the sheet is never modified.
    Infer {
        /// Log sheet to read (defaults to `log-sheet-file` from config).
        #[arg(long)]
        sheet: Option<PathBuf>,

        /// Scoring scheme (defaults to `weighting` from config).
        #[arg(long, value_enum)]
        weighting: Option<WeightingArg>,

        /// Also write the suggestions as JSON to this file.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// CLI-facing weighting, mapped to the domain `Weighting`.
#[derive(Debug, Clone, ValueEnum)]
pub enum WeightingArg {
    /// Share of matched word occurrences per task.
    Plain,
    /// Share scaled by how rare each task is overall.
    InverseFrequency,
}

impl WeightingArg {
    fn to_domain(&self) -> Weighting {
        match self {
            Self::Plain => Weighting::Plain,
            Self::InverseFrequency => Weighting::InverseFrequency,
        }
    }
}

/// Run the CLI, returning an error message on failure.
///
/// Arguments are parsed before the config is loaded, so `--help` works
/// even with a broken config file.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = Config::load().map_err(|e| format!("failed to load config: {e}"))?;
    let storage =
        Storage::current().map_err(|e| format!("could not determine working directory: {e}"))?;
    execute(cli, &config, &storage)
}

fn execute(cli: Cli, config: &Config, storage: &Storage) -> Result<(), String> {
    match cli.command {
        Command::FromText { input, out } => {
            let input = input.as_deref().unwrap_or(config.text_file.as_path());
            let out = out.as_deref().unwrap_or(config.draft_file.as_path());
            cmd_from_text(storage, input, out)
        }
        Command::Infer {
            sheet,
            weighting,
            out,
        } => {
            let sheet = sheet.as_deref().unwrap_or(config.log_sheet_file.as_path());
            let weighting = weighting
                .as_ref()
                .map_or(config.weighting, WeightingArg::to_domain);
            cmd_infer(storage, sheet, weighting, out.as_deref())
        }
    }
}

fn cmd_from_text(storage: &Storage, input: &Path, out: &Path) -> Result<(), String> {
    let text = storage
        .read_log(input)
        .map_err(|e| format!("failed to read log: {e}"))?;

    let entries = parser::parse_log(&text)
        .map_err(|e| format!("failed to parse {}: {e}", input.display()))?;

    let written = storage
        .write_draft(out, &entries)
        .map_err(|e| format!("failed to write draft: {e}"))?;

    eprintln!("Parsed {} entries → {}", entries.len(), written.display());
    Ok(())
}

fn cmd_infer(
    storage: &Storage,
    sheet: &Path,
    weighting: Weighting,
    out: Option<&Path>,
) -> Result<(), String> {
    let rows = storage
        .read_sheet(sheet)
        .map_err(|e| format!("failed to read log sheet: {e}"))?;

    let suggestions = infer::suggest(&rows, weighting);
    let confident = suggestions
        .iter()
        .filter(|s| !s.outcome.candidates().is_empty())
        .count();
    info!(
        rows = rows.len(),
        unlabeled = suggestions.len(),
        confident,
        "scored unlabeled rows"
    );
    print!("{}", format_suggestions(&suggestions));

    if let Some(out) = out {
        let written = storage
            .write_json(out, &suggestions)
            .map_err(|e| format!("failed to write suggestions: {e}"))?;
        eprintln!(
            "Wrote {} suggestion(s) → {}",
            suggestions.len(),
            written.display()
        );
    }

    Ok(())
}
