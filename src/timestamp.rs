//! Timestamp grammar for the dictated log.
//!
//! A timestamp line is exactly seven space-separated tokens, as printed by `date`:
//!
//! ```text
//! Sat 25 May 2024 10:07:32 PM HKT
//! Fri 25 Apr 2025 02:50:06 AM +04
//! ```
//!
//! Validation is structural only. The canonical form is `YYYY-MM-DD HH:MM:SS`
//! on a 24-hour clock.

use crate::model::CanonicalTimestamp;

/// Month abbreviations; index + 1 is the month number.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Errors produced while converting a timestamp line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    #[error("not a timestamp: {0:?}")]
    Malformed(String),

    #[error("unknown month: {0:?}")]
    UnknownMonth(String),
}

/// Whether `line` has the shape of a timestamp.
///
/// Day and year must be numbers other than zero, so `0` is rejected
/// even though it is numeric.
pub fn is_timestamp(line: &str) -> bool {
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.len() != 7 {
        return false;
    }

    has_len(parts[0], 3)
        && is_nonzero_number(parts[1])
        && has_len(parts[2], 3)
        && is_nonzero_number(parts[3])
        && is_clock(parts[4])
        && has_len(parts[5], 2)
        && has_len(parts[6], 3)
}

/// Convert a timestamp line to its canonical 24-hour form.
///
/// Hours are not range-checked: `12 AM` becomes `00`, any other `PM` hour gains 12,
/// everything else passes through.
pub fn parse_timestamp(line: &str) -> Result<CanonicalTimestamp, TimestampError> {
    if !is_timestamp(line) {
        return Err(TimestampError::Malformed(line.to_string()));
    }

    let parts: Vec<&str> = line.split(' ').collect();
    let day = format!("{:0>2}", parts[1]);
    let month = month_number(parts[2])?;
    let year = parts[3];
    let clock = parts[4];
    let hour = to_24_hour(&clock[0..2], parts[5]);
    let minute = &clock[3..5];
    let second = &clock[6..8];

    Ok(CanonicalTimestamp::new(format!(
        "{year}-{month:02}-{day} {hour}:{minute}:{second}"
    )))
}

/// Look up a month abbreviation, returning 1 through 12.
pub fn month_number(token: &str) -> Result<usize, TimestampError> {
    MONTHS
        .iter()
        .position(|m| *m == token)
        .map(|i| i + 1)
        .ok_or_else(|| TimestampError::UnknownMonth(token.to_string()))
}

fn to_24_hour(hour: &str, meridiem: &str) -> String {
    match (hour, meridiem) {
        ("12", "AM") => "00".to_string(),
        (h, "PM") if h != "12" => {
            let h = loose_number(h).unwrap_or_default();
            (h + 12.0).to_string()
        }
        (h, _) => h.to_string(),
    }
}

fn has_len(token: &str, len: usize) -> bool {
    token.chars().count() == len
}

/// `HH:MM:SS`, each group numeric.
fn is_clock(token: &str) -> bool {
    let bytes = token.as_bytes();
    token.is_ascii()
        && bytes.len() == 8
        && bytes[2] == b':'
        && bytes[5] == b':'
        && [&token[0..2], &token[3..5], &token[6..8]]
            .iter()
            .all(|group| loose_number(group).is_some())
}

fn is_nonzero_number(token: &str) -> bool {
    loose_number(token).is_some_and(|n| n != 0.0)
}

/// Lenient numeric coercion: surrounding whitespace is ignored and a blank token is zero.
///
/// Only finite decimal numbers count; `inf`, `NaN` and `0x19` do not.
fn loose_number(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
