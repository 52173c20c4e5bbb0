//! Scoring a remark against learned word statistics.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::model::{Outcome, TaskProbability};

use super::{WordStats, extract_words};

/// Candidates below this probability are not reported.
pub const MIN_PROBABILITY: f64 = 0.05;

/// At most this many candidates are reported.
pub const MAX_CANDIDATES: usize = 5;

/// How per-task scores become probabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weighting {
    /// Share of matched occurrences belonging to each task.
    #[default]
    Plain,

    /// Plain share scaled by how rare the task is overall, then renormalized.
    /// Keeps tasks with long, wordy remarks from drowning out the rest.
    InverseFrequency,
}

/// Ranks candidate tasks for a remark.
pub struct Scorer<'a> {
    stats: &'a WordStats,
    weighting: Weighting,
}

impl<'a> Scorer<'a> {
    pub fn new(stats: &'a WordStats, weighting: Weighting) -> Self {
        Self { stats, weighting }
    }

    /// Every task that shares a word with `remark`, most probable first.
    ///
    /// Empty when no word of the remark appears in the statistics.
    /// Ties are ordered by task name.
    pub fn rank(&self, remark: &str) -> Vec<TaskProbability> {
        let mut task_scores: BTreeMap<&str, u32> = BTreeMap::new();
        let mut total_score = 0;

        for word in extract_words(remark) {
            let Some(entry) = self.stats.get(&word) else {
                continue;
            };
            for (task, occurrence) in &entry.tasks {
                *task_scores.entry(task.as_str()).or_default() += occurrence;
                total_score += occurrence;
            }
        }

        if total_score == 0 {
            return Vec::new();
        }

        let total_score = f64::from(total_score);
        let mut candidates: Vec<TaskProbability> = task_scores
            .into_iter()
            .map(|(task, score)| TaskProbability {
                task_name: task.to_string(),
                probability: f64::from(score) / total_score,
            })
            .collect();

        if self.weighting == Weighting::InverseFrequency {
            self.reweight(&mut candidates);
        }

        candidates.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.task_name.cmp(&b.task_name))
        });
        candidates
    }

    /// Ranked candidates that clear [`MIN_PROBABILITY`], capped at [`MAX_CANDIDATES`].
    pub fn score(&self, remark: &str) -> Outcome {
        let candidates: Vec<TaskProbability> = self
            .rank(remark)
            .into_iter()
            .filter(|c| c.probability >= MIN_PROBABILITY)
            .take(MAX_CANDIDATES)
            .collect();

        if candidates.is_empty() {
            Outcome::NoConfidentSuggestion
        } else {
            Outcome::Ranked(candidates)
        }
    }

    fn reweight(&self, candidates: &mut [TaskProbability]) {
        let grand_total = f64::from(self.stats.grand_total());
        for candidate in candidates.iter_mut() {
            let task_total = f64::from(self.stats.task_total(&candidate.task_name).max(1));
            candidate.probability *= grand_total / task_total;
        }

        let sum: f64 = candidates.iter().map(|c| c.probability).sum();
        if sum > 0.0 {
            for candidate in candidates.iter_mut() {
                candidate.probability /= sum;
            }
        }
    }
}
