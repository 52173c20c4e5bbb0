//! Sheet rows: the tabular input to task inference.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the log sheet. Only the task and remark matter here;
/// other columns are ignored when reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetRow {
    /// Empty when the row still needs a task.
    #[serde(rename = "Task", deserialize_with = "null_as_empty")]
    pub task: String,

    #[serde(rename = "Remark", deserialize_with = "null_as_empty")]
    pub remark: String,
}

impl SheetRow {
    pub fn new(task: impl Into<String>, remark: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            remark: remark.into(),
        }
    }

    pub fn is_labeled(&self) -> bool {
        !self.task.is_empty()
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
