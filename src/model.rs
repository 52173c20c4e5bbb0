//! Core data model for the timesheet.
//!
//! Entries come out of the log parser; sheet rows go into task inference;
//! suggestions come back out of it.

mod entry;
mod row;
mod suggestion;

pub use entry::{CanonicalTimestamp, DraftRow, LogEntry};
pub use row::SheetRow;
pub use suggestion::{Outcome, Suggestion, TaskProbability};
