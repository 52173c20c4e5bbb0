//! Log parser: turns the dictated activity log into entries.
//!
//! The log is a strict line format:
//!
//! ```text
//! ---
//! media-search
//! Mon 21 Apr 2025 10:35:08 PM HKT
//! Mon 21 Apr 2025 10:53:03 PM HKT
//! wip: add types
//! Mon 21 Apr 2025 11:43:14 PM HKT
//! Tue 22 Apr 2025 12:20:23 AM HKT
//! feat: more work
//! ---
//! ```
//!
//! A separator opens a block, the next line names the task, then come
//! a start timestamp, an end timestamp, and a free-text remark.
//! A timestamp inside a remark closes the entry and starts the next interval
//! under the same task. Any error aborts the whole parse.

use std::fmt;

use tracing::{debug, info, warn};

use crate::model::LogEntry;
use crate::timestamp::{TimestampError, is_timestamp, parse_timestamp};

/// Line that opens and closes a block.
pub const SEPARATOR: &str = "---";

/// Errors that abort a parse. Every variant names the 0-based line index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(
        "missing fields at line {index}: task {task_name:?}, from {time_start:?}, to {time_end:?}, remark {remark:?}"
    )]
    IncompleteEntry {
        index: usize,
        task_name: String,
        time_start: String,
        time_end: String,
        remark: String,
    },

    #[error("unknown month {month:?} at line {index}")]
    UnknownMonth { index: usize, month: String },

    #[error("unknown state: {state} at line {index}: {line:?}")]
    UnknownState {
        state: &'static str,
        index: usize,
        line: String,
    },
}

pub type Result<T> = core::result::Result<T, ParseError>;

/// Where the parser is within a block, carrying the fields gathered so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Skipping everything before the first separator.
    SeekBlockStart,

    SeekTaskName,

    SeekIntervalStart {
        task: String,
    },

    SeekIntervalEnd {
        task: String,
        start: String,
    },

    /// Accumulating remark lines, each followed by a newline.
    SeekRemark {
        task: String,
        start: String,
        end: String,
        remark: String,
    },
}

impl State {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SeekBlockStart => "seek-block-start",
            Self::SeekTaskName => "seek-task-name",
            Self::SeekIntervalStart { .. } => "seek-interval-start",
            Self::SeekIntervalEnd { .. } => "seek-interval-end",
            Self::SeekRemark { .. } => "seek-remark",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a whole log document.
///
/// Carriage returns are dropped and the document is trimmed before splitting into lines.
/// A remark still open at end of input is never finalized; the log is expected
/// to close with a separator.
pub fn parse_log(text: &str) -> Result<Vec<LogEntry>> {
    let text = text.trim().replace('\r', "");

    let mut state = State::SeekBlockStart;
    let mut entries = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let (next, entry) = step(state, index, line)?;
        state = next;
        if let Some(entry) = entry {
            debug!(
                task = %entry.task_name,
                from = %entry.time_start,
                to = %entry.time_end,
                minutes = ?entry.minutes(),
                "entry finalized"
            );
            entries.push(entry);
        }
    }

    match &state {
        State::SeekBlockStart | State::SeekTaskName => {}
        State::SeekRemark { task, .. }
        | State::SeekIntervalEnd { task, .. }
        | State::SeekIntervalStart { task } => {
            warn!(task = %task, state = %state, "log ends mid-block; pending entry dropped");
        }
    }

    info!(entries = entries.len(), "parsed log");
    Ok(entries)
}

/// Advance the parser by one line.
///
/// Returns the next state and, when a remark closes, the finalized entry.
pub fn step(state: State, index: usize, line: &str) -> Result<(State, Option<LogEntry>)> {
    match state {
        State::SeekBlockStart => {
            let next = if line == SEPARATOR {
                State::SeekTaskName
            } else {
                State::SeekBlockStart
            };
            Ok((next, None))
        }

        State::SeekTaskName => {
            if line.trim().is_empty() {
                return Ok((State::SeekTaskName, None));
            }
            let task = line.to_string();
            Ok((State::SeekIntervalStart { task }, None))
        }

        State::SeekIntervalStart { task } => {
            if line.trim().is_empty() {
                return Ok((State::SeekIntervalStart { task }, None));
            }
            let start = line.to_string();
            Ok((State::SeekIntervalEnd { task, start }, None))
        }

        State::SeekIntervalEnd { task, start } if !line.is_empty() => {
            let next = State::SeekRemark {
                task,
                start,
                end: line.to_string(),
                remark: String::new(),
            };
            Ok((next, None))
        }

        State::SeekRemark {
            task,
            start,
            end,
            mut remark,
        } => {
            if is_timestamp(line) {
                let entry = finalize(index, &task, &start, &end, &remark)?;
                let start = line.to_string();
                Ok((State::SeekIntervalEnd { task, start }, Some(entry)))
            } else if line == SEPARATOR {
                let entry = finalize(index, &task, &start, &end, &remark)?;
                Ok((State::SeekTaskName, Some(entry)))
            } else {
                remark.push_str(line);
                remark.push('\n');
                let next = State::SeekRemark {
                    task,
                    start,
                    end,
                    remark,
                };
                Ok((next, None))
            }
        }

        state => Err(ParseError::UnknownState {
            state: state.name(),
            index,
            line: line.to_string(),
        }),
    }
}

fn finalize(index: usize, task: &str, start: &str, end: &str, remark: &str) -> Result<LogEntry> {
    let remark = remark.trim();
    let incomplete = || ParseError::IncompleteEntry {
        index,
        task_name: task.to_string(),
        time_start: start.to_string(),
        time_end: end.to_string(),
        remark: remark.to_string(),
    };

    if start.is_empty() || end.is_empty() || remark.is_empty() {
        return Err(incomplete());
    }

    let convert = |line: &str| {
        parse_timestamp(line).map_err(|e| match e {
            TimestampError::Malformed(_) => incomplete(),
            TimestampError::UnknownMonth(month) => ParseError::UnknownMonth { index, month },
        })
    };

    Ok(LogEntry {
        task_name: task.to_string(),
        time_start: convert(start)?,
        time_end: convert(end)?,
        remark: remark.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_INTERVALS: &str = "\
---
media-search
Mon 21 Apr 2025 10:35:08 PM HKT
Mon 21 Apr 2025 10:53:03 PM HKT
wip: add types
Mon 21 Apr 2025 11:43:14 PM HKT
Tue 22 Apr 2025 12:20:23 AM HKT
feat: more work
---";

    #[test]
    fn consecutive_intervals_share_the_task() {
        let entries = parse_log(TWO_INTERVALS).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].task_name, "media-search");
        assert_eq!(entries[0].time_start.as_str(), "2025-04-21 22:35:08");
        assert_eq!(entries[0].time_end.as_str(), "2025-04-21 22:53:03");
        assert_eq!(entries[0].remark, "wip: add types");

        assert_eq!(entries[1].task_name, "media-search");
        assert_eq!(entries[1].time_start.as_str(), "2025-04-21 23:43:14");
        assert_eq!(entries[1].time_end.as_str(), "2025-04-22 00:20:23");
        assert_eq!(entries[1].remark, "feat: more work");
    }

    #[test]
    fn dictated_log_with_blank_lines_and_several_blocks() {
        let text = "\
notes before the first block are skipped

---

media-search

Tue 22 Apr 2025 12:04:50 PM HKT
Tue 22 Apr 2025 12:29:38 PM HKT

feat: add next page function for duckduckgo image search
chore: validate search response with cast.ts

---

format-html-cli

Fri 25 Apr 2025 02:50:06 AM +04
Fri 25 Apr 2025 03:12:10 AM +04

init: finish project setup based on format-json-cli

---
";
        let entries = parse_log(text).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].task_name, "media-search");
        assert_eq!(
            entries[0].remark,
            "feat: add next page function for duckduckgo image search\n\
             chore: validate search response with cast.ts"
        );
        assert_eq!(entries[1].task_name, "format-html-cli");
        assert_eq!(entries[1].time_start.as_str(), "2025-04-25 02:50:06");
        assert_eq!(entries[1].time_end.as_str(), "2025-04-25 03:12:10");
    }

    #[test]
    fn carriage_returns_are_ignored() {
        let text = TWO_INTERVALS.replace('\n', "\r\n");
        let entries = parse_log(&text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].remark, "feat: more work");
    }

    #[test]
    fn missing_remark_aborts() {
        let text = "\
---
media-search
Mon 21 Apr 2025 10:35:08 PM HKT
Mon 21 Apr 2025 10:53:03 PM HKT
---";
        let err = parse_log(text).unwrap_err();
        assert_eq!(
            err,
            ParseError::IncompleteEntry {
                index: 4,
                task_name: "media-search".into(),
                time_start: "Mon 21 Apr 2025 10:35:08 PM HKT".into(),
                time_end: "Mon 21 Apr 2025 10:53:03 PM HKT".into(),
                remark: String::new(),
            }
        );
    }

    #[test]
    fn whitespace_only_remark_aborts() {
        let text = "\
---
media-search
Mon 21 Apr 2025 10:35:08 PM HKT
Mon 21 Apr 2025 10:53:03 PM HKT

---";
        let err = parse_log(text).unwrap_err();
        assert!(matches!(err, ParseError::IncompleteEntry { index: 5, .. }));
    }

    #[test]
    fn malformed_start_reports_incomplete_entry() {
        let text = "\
---
media-search
yesterday evening
Mon 21 Apr 2025 10:53:03 PM HKT
wip
---";
        let err = parse_log(text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::IncompleteEntry { ref time_start, .. } if time_start == "yesterday evening"
        ));
    }

    #[test]
    fn unknown_month_aborts() {
        let text = "\
---
media-search
Mon 21 Avr 2025 10:35:08 PM HKT
Mon 21 Apr 2025 10:53:03 PM HKT
wip
---";
        let err = parse_log(text).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownMonth {
                index: 5,
                month: "Avr".into()
            }
        );
    }

    #[test]
    fn blank_line_between_interval_timestamps_is_rejected() {
        let text = "\
---
media-search
Mon 21 Apr 2025 10:35:08 PM HKT

Mon 21 Apr 2025 10:53:03 PM HKT
wip
---";
        let err = parse_log(text).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownState {
                state: "seek-interval-end",
                index: 3,
                line: String::new(),
            }
        );
    }

    #[test]
    fn open_remark_at_end_of_input_is_dropped() {
        let text = "\
---
media-search
Mon 21 Apr 2025 10:35:08 PM HKT
Mon 21 Apr 2025 10:53:03 PM HKT
wip: never closed";
        let entries = parse_log(text).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn text_without_separator_yields_nothing() {
        assert!(parse_log("just some notes\nand more").unwrap().is_empty());
        assert!(parse_log("").unwrap().is_empty());
    }

    #[test]
    fn step_accumulates_remark_lines() {
        let state = State::SeekRemark {
            task: "t".into(),
            start: "s".into(),
            end: "e".into(),
            remark: "first\n".into(),
        };
        let (next, entry) = step(state, 7, "second").unwrap();

        assert!(entry.is_none());
        assert_eq!(
            next,
            State::SeekRemark {
                task: "t".into(),
                start: "s".into(),
                end: "e".into(),
                remark: "first\nsecond\n".into(),
            }
        );
    }

    #[test]
    fn step_timestamp_in_remark_starts_next_interval() {
        let state = State::SeekRemark {
            task: "animal-ai".into(),
            start: "Mon 21 Apr 2025 10:35:08 PM HKT".into(),
            end: "Mon 21 Apr 2025 10:53:03 PM HKT".into(),
            remark: "team: dev\n\n".into(),
        };
        let line = "Mon 21 Apr 2025 11:43:14 PM HKT";
        let (next, entry) = step(state, 9, line).unwrap();

        let entry = entry.unwrap();
        assert_eq!(entry.remark, "team: dev");
        assert_eq!(
            next,
            State::SeekIntervalEnd {
                task: "animal-ai".into(),
                start: line.into(),
            }
        );
    }

    #[test]
    fn step_skips_blank_lines_while_seeking_task() {
        let (next, entry) = step(State::SeekTaskName, 1, "   ").unwrap();
        assert_eq!(next, State::SeekTaskName);
        assert!(entry.is_none());
    }
}
