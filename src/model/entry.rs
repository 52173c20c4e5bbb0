//! Log entries: one finished interval of work.

use std::fmt;

use jiff::Unit;
use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// A `YYYY-MM-DD HH:MM:SS` timestamp on a 24-hour clock.
///
/// Built by the timestamp parser, or read back from a draft sheet written earlier;
/// deserializing does not re-validate the text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalTimestamp(String);

impl CanonicalTimestamp {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret as a civil date-time.
    ///
    /// `None` when the text names no real instant, e.g. hour `25` from a `13:00:00 PM` line.
    pub fn to_datetime(&self) -> Option<DateTime> {
        DateTime::strptime("%Y-%m-%d %H:%M:%S", &self.0).ok()
    }
}

impl fmt::Display for CanonicalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A finalized interval: task, start, end, and what was done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub task_name: String,
    pub time_start: CanonicalTimestamp,
    pub time_end: CanonicalTimestamp,

    /// Trimmed; may span several lines.
    pub remark: String,
}

impl LogEntry {
    /// Whole minutes between start and end, if both are real instants.
    pub fn minutes(&self) -> Option<i64> {
        let start = self.time_start.to_datetime()?;
        let end = self.time_end.to_datetime()?;
        let span = start.until((Unit::Minute, end)).ok()?;
        Some(span.get_minutes())
    }
}

/// A log entry as written to the draft sheet.
///
/// Durations, cost, and the running total are filled in later by hand or by
/// the summing tools, so they are always written empty here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRow {
    #[serde(rename = "Task")]
    pub task: String,

    #[serde(rename = "From")]
    pub from: CanonicalTimestamp,

    #[serde(rename = "To")]
    pub to: CanonicalTimestamp,

    #[serde(rename = "Duration (hour)")]
    pub duration_hour: String,

    #[serde(rename = "Duration (minute)")]
    pub duration_minute: String,

    #[serde(rename = "Cost")]
    pub cost: String,

    #[serde(rename = "acc")]
    pub acc: String,

    #[serde(rename = "Remark")]
    pub remark: String,
}

impl From<&LogEntry> for DraftRow {
    fn from(entry: &LogEntry) -> Self {
        Self {
            task: entry.task_name.clone(),
            from: entry.time_start.clone(),
            to: entry.time_end.clone(),
            duration_hour: String::new(),
            duration_minute: String::new(),
            cost: String::new(),
            acc: String::new(),
            remark: entry.remark.clone(),
        }
    }
}
