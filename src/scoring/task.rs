//! Task payload types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A task identifier, unique within one request batch.
///
/// Callers may use numbers or strings; both compare by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Int(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Int(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::Int(n)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId::Text(s.to_string())
    }
}

/// A to-do item as submitted by the caller.
///
/// Every field is optional in the payload; scoring applies defaults for
/// missing or null values. Fields we do not interpret are preserved and
/// echoed back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique id within the batch; assigned sequentially when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Due date as `YYYY-MM-DD`. An invalid or missing date is scored as
    /// far future, never rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Estimated effort in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<i64>,

    /// Importance on a 1-10 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<i64>,

    /// Ids of tasks this task depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<TaskId>,

    /// Unrecognized payload fields, kept for the response.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Importance with the default (5) applied.
    pub fn importance(&self) -> i64 {
        self.importance.unwrap_or(5)
    }

    /// Estimated hours with the default (1) applied.
    pub fn estimated_hours(&self) -> i64 {
        self.estimated_hours.unwrap_or(1)
    }
}

/// Boolean conditions surfaced alongside the score for downstream UI use.
///
/// Only set flags appear in serialized output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default, skip_serializing_if = "is_false")]
    pub overdue: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub due_soon: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub circular: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}
