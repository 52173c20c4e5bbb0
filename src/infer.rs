//! Task inference for unlabeled sheet rows.
//!
//! Word/task co-occurrence counts are learned from the rows that already have
//! a task, then each unlabeled remark is scored against them. The result is a
//! ranked list of candidates for someone to review; rows are never relabeled here.

mod score;
mod stats;

use tracing::{debug, warn};

use crate::model::{SheetRow, Suggestion};

pub use score::{Scorer, Weighting};
pub use stats::WordStats;

/// Words too common to say anything about a task.
const STOP_WORDS: &[&str] = &["is", "an", "the", "and", "or", "not", "of", "on", "to"];

/// Stripped from every word before counting.
const SYMBOLS: &[char] = &['(', ')', '-', '.', ','];

/// Split a remark into the words used for counting and scoring.
///
/// Case-sensitive, no stemming.
pub fn extract_words(remark: &str) -> Vec<String> {
    remark
        .split_whitespace()
        .map(|word| word.replace(SYMBOLS, ""))
        .filter(|word| !word.is_empty() && !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

/// Score every unlabeled row against statistics learned from the labeled ones.
///
/// Suggestions come back in row order, one per unlabeled row.
pub fn suggest(rows: &[SheetRow], weighting: Weighting) -> Vec<Suggestion> {
    let stats = WordStats::build(rows);
    if stats.is_empty() {
        warn!("no labeled rows to learn from");
    }
    debug!(words = stats.len(), "learned word statistics");

    let scorer = Scorer::new(&stats, weighting);
    rows.iter()
        .filter(|row| !row.is_labeled())
        .map(|row| Suggestion {
            remark: row.remark.clone(),
            outcome: scorer.score(&row.remark),
        })
        .collect()
}
