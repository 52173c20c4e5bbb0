//! Output formatting for CLI display.

use crate::model::{Outcome, Suggestion, TaskProbability};

/// Format every suggestion as a block followed by a blank line.
pub(super) fn format_suggestions(suggestions: &[Suggestion]) -> String {
    suggestions.iter().fold(String::new(), |mut out, s| {
        out.push_str(&format_suggestion(s));
        out.push('\n');
        out
    })
}

/// Format one suggestion: the remark, then its candidates or a notice that there are none.
pub(super) fn format_suggestion(suggestion: &Suggestion) -> String {
    let mut out = format!("Probable tasks for remark: {}\n", suggestion.remark);
    match &suggestion.outcome {
        Outcome::Ranked(candidates) => {
            for candidate in candidates {
                out.push_str(&format_candidate(candidate));
                out.push('\n');
            }
        }
        Outcome::NoConfidentSuggestion => out.push_str("No tasks meet the criteria.\n"),
    }
    out
}

fn format_candidate(candidate: &TaskProbability) -> String {
    format!(
        "{}: {:.2}%",
        candidate.task_name,
        candidate.probability * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(task: &str, probability: f64) -> TaskProbability {
        TaskProbability {
            task_name: task.to_string(),
            probability,
        }
    }

    #[test]
    fn format_candidate_as_percentage() {
        let cases = [
            (candidate("animal-ai", 1.0), "animal-ai: 100.00%"),
            (candidate("website", 2.0 / 3.0), "website: 66.67%"),
            (candidate("image-ai-builder", 0.05), "image-ai-builder: 5.00%"),
        ];
        for (c, expected) in cases {
            assert_eq!(format_candidate(&c), expected);
        }
    }

    #[test]
    fn format_ranked_suggestion() {
        let suggestion = Suggestion {
            remark: "team: demo sofia".into(),
            outcome: Outcome::Ranked(vec![
                candidate("animal-ai", 0.75),
                candidate("image-ai-builder", 0.25),
            ]),
        };
        assert_eq!(
            format_suggestion(&suggestion),
            "Probable tasks for remark: team: demo sofia\n\
             animal-ai: 75.00%\n\
             image-ai-builder: 25.00%\n"
        );
    }

    #[test]
    fn format_empty_suggestion() {
        let suggestion = Suggestion {
            remark: "unrelated".into(),
            outcome: Outcome::NoConfidentSuggestion,
        };
        assert_eq!(
            format_suggestion(&suggestion),
            "Probable tasks for remark: unrelated\nNo tasks meet the criteria.\n"
        );
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let suggestions = [
            Suggestion {
                remark: "a".into(),
                outcome: Outcome::NoConfidentSuggestion,
            },
            Suggestion {
                remark: "b".into(),
                outcome: Outcome::NoConfidentSuggestion,
            },
        ];
        let out = format_suggestions(&suggestions);
        assert_eq!(out.matches("\n\n").count(), 2);
        assert!(out.starts_with("Probable tasks for remark: a\n"));
    }
}
