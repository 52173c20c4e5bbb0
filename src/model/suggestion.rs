//! Suggestions: ranked task candidates for an unlabeled row.

use serde::Serialize;

/// A candidate task and how likely it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProbability {
    pub task_name: String,

    /// In `[0, 1]`.
    pub probability: f64,
}

/// What scoring produced for one remark.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "candidates", rename_all = "camelCase")]
pub enum Outcome {
    /// Candidates above the threshold, most probable first.
    Ranked(Vec<TaskProbability>),

    /// No word matched labeled data, or nothing cleared the threshold.
    NoConfidentSuggestion,
}

impl Outcome {
    pub fn candidates(&self) -> &[TaskProbability] {
        match self {
            Self::Ranked(candidates) => candidates,
            Self::NoConfidentSuggestion => &[],
        }
    }
}

/// The scored result for one unlabeled row, kept for operator review.
///
/// Never written back into the row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub remark: String,
    pub outcome: Outcome,
}
