//! Word/task co-occurrence counts.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::model::SheetRow;

use super::extract_words;

/// How often one word appeared, overall and per task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    pub total_occurrence: u32,

    /// Task name → occurrences of this word in that task's remarks.
    pub tasks: BTreeMap<String, u32>,
}

/// Counts learned from labeled rows. Built once, then read by the scorer.
#[derive(Debug, Default)]
pub struct WordStats {
    words: HashMap<String, WordEntry>,
    task_totals: HashMap<String, u32>,
    grand_total: u32,
}

impl WordStats {
    /// Learn from every labeled row; unlabeled rows are skipped.
    pub fn build<'a>(rows: impl IntoIterator<Item = &'a SheetRow>) -> Self {
        let mut stats = Self::default();
        for row in rows {
            if row.is_labeled() {
                stats.record(&row.task, &row.remark);
            }
        }
        stats
    }

    /// Count every word of `remark` towards `task`.
    pub fn record(&mut self, task: &str, remark: &str) {
        for word in extract_words(remark) {
            let entry = self
                .words
                .entry(word.clone())
                .or_insert_with(|| WordEntry {
                    word,
                    ..WordEntry::default()
                });
            entry.total_occurrence += 1;
            *entry.tasks.entry(task.to_string()).or_default() += 1;

            *self.task_totals.entry(task.to_string()).or_default() += 1;
            self.grand_total += 1;
        }
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.words.get(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Occurrences of all words under `task`.
    pub fn task_total(&self, task: &str) -> u32 {
        self.task_totals.get(task).copied().unwrap_or(0)
    }

    /// Occurrences of all words under all tasks.
    pub fn grand_total(&self) -> u32 {
        self.grand_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<SheetRow> {
        vec![
            SheetRow::new("image-ai-builder", "exp: discuss rotation and zoom with elly"),
            SheetRow::new("image-ai-builder", "team: dev with elly"),
            SheetRow::new("animal-ai", "team: discuss with benny"),
            SheetRow::new("", "team: demo sofia with elly"),
        ]
    }

    #[test]
    fn counts_words_per_task() {
        let stats = WordStats::build(&sample_rows());

        let elly = stats.get("elly").unwrap();
        assert_eq!(elly.word, "elly");
        assert_eq!(elly.total_occurrence, 2);
        assert_eq!(elly.tasks.get("image-ai-builder"), Some(&2));
        assert_eq!(elly.tasks.get("animal-ai"), None);

        let team = stats.get("team:").unwrap();
        assert_eq!(team.total_occurrence, 2);
        assert_eq!(team.tasks.get("image-ai-builder"), Some(&1));
        assert_eq!(team.tasks.get("animal-ai"), Some(&1));
    }

    #[test]
    fn skips_unlabeled_rows() {
        let stats = WordStats::build(&sample_rows());
        assert!(stats.get("sofia").is_none());
        assert!(stats.get("demo").is_none());
    }

    #[test]
    fn skips_stop_words() {
        let stats = WordStats::build(&sample_rows());
        assert!(stats.get("and").is_none());
    }

    #[test]
    fn totals_per_task_and_overall() {
        let stats = WordStats::build(&sample_rows());

        // "exp: discuss rotation zoom with elly" + "team: dev with elly"
        assert_eq!(stats.task_total("image-ai-builder"), 10);
        // "team: discuss with benny"
        assert_eq!(stats.task_total("animal-ai"), 4);
        assert_eq!(stats.task_total("website"), 0);
        assert_eq!(stats.grand_total(), 14);
    }

    #[test]
    fn repeated_word_in_one_remark_counts_twice() {
        let mut stats = WordStats::default();
        stats.record("website", "form form");
        assert_eq!(stats.get("form").unwrap().total_occurrence, 2);
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn empty_when_nothing_is_labeled() {
        let stats = WordStats::build(&[SheetRow::new("", "some remark")]);
        assert!(stats.is_empty());
        assert_eq!(stats.grand_total(), 0);
    }
}
