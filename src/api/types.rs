//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::scoring::{Flags, Task, TaskId};

/// Query parameters accepted by the analyze endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeQuery {
    /// Strategy selector; unrecognized values fall back to smart.
    #[serde(default)]
    pub strategy: Option<String>,
}

/// A task echoed back with its scoring outcome attached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredTask {
    /// The submitted task, unchanged apart from id assignment.
    #[serde(flatten)]
    pub task: Task,

    pub score: i64,

    /// Human-readable contributions, in evaluation order.
    pub explanation: Vec<String>,

    pub flags: Flags,
}

/// Reduced projection returned by the suggest endpoint.
///
/// Echoes the raw submitted values, so unset fields serialize as null.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub id: Option<TaskId>,
    pub title: Option<String>,
    pub due_date: Option<String>,
    pub estimated_hours: Option<i64>,
    pub importance: Option<i64>,
    pub score: i64,

    /// Explanation lines joined with "; ".
    pub reason: String,

    pub flags: Flags,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}
