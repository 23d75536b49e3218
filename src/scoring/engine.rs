//! The scoring engine.
//!
//! Scores are additive: each factor contributes independently, so
//! evaluation order only determines the order of explanation lines,
//! which is part of the displayed output and therefore fixed.

use chrono::{Duration, NaiveDate};

use super::graph;
use super::{Flags, Task};

/// Scoring weights (tweakable).
mod weights {
    pub const URGENCY_OVERDUE: i64 = 100;
    pub const URGENCY_SOON: i64 = 50;
    /// Multiplied by the importance value.
    pub const IMPORTANCE: i64 = 5;
    pub const QUICK_WIN: i64 = 10;
    pub const DEPENDENCY_BLOCKER: i64 = 15;
    /// Per hour above the quick-win threshold.
    pub const EFFORT_PENALTY: i64 = 1;
    pub const CIRCULAR: i64 = 50;
}

/// Substitute horizon for missing or unparseable due dates: five years.
const FAR_FUTURE_DAYS: i64 = 1825;

/// A named scoring profile altering which factor is amplified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Balanced scoring; no extra weighting.
    #[default]
    Smart,
    /// Heavily boost low-effort tasks.
    Fastest,
    /// Amplify importance.
    Impact,
    /// Amplify urgency.
    Deadline,
}

impl Strategy {
    /// Parse a strategy selector. Anything unrecognized, including none
    /// at all, is `Smart`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("fastest") => Strategy::Fastest,
            Some("impact") => Strategy::Impact,
            Some("deadline") => Strategy::Deadline,
            _ => Strategy::Smart,
        }
    }
}

/// Outcome of scoring a single task: the score, human-readable
/// explanation lines in evaluation order, and boolean condition flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: i64,
    pub explanation: Vec<String>,
    pub flags: Flags,
}

/// Score one task against its batch.
///
/// Pure: the result depends only on the arguments. `batch` is the full
/// sibling set from the request; when it is empty the dependency steps
/// are skipped entirely. `today` anchors all due-date arithmetic, which
/// keeps scoring deterministic under test.
///
/// Total: arithmetic saturates, so extreme field values shift the score
/// toward the i64 bounds instead of overflowing.
pub fn score_task(
    task: &Task,
    batch: &[Task],
    strategy: Strategy,
    today: NaiveDate,
) -> ScoreResult {
    let mut score: i64 = 0;
    let mut explanation: Vec<String> = Vec::new();
    let mut flags = Flags::default();

    let importance = task.importance();
    let estimated = task.estimated_hours();

    // An unusable due date deprioritizes the task but is mentioned.
    let due = task
        .due_date
        .as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .unwrap_or_else(|| {
            explanation.push("Invalid due date; treated as far future".to_string());
            today + Duration::days(FAR_FUTURE_DAYS)
        });
    let days_until_due = (due - today).num_days();

    // Urgency
    if days_until_due < 0 {
        score = score.saturating_add(weights::URGENCY_OVERDUE);
        explanation.push(format!("Overdue by {} days", -days_until_due));
        flags.overdue = true;
    } else if days_until_due <= 3 {
        score = score.saturating_add(weights::URGENCY_SOON);
        explanation.push(format!("Due in {} days", days_until_due));
        flags.due_soon = true;
    } else {
        // decaying trickle for closer deadlines, zero once >= 30 days out
        score = score.saturating_add(((30 - days_until_due) / 3).max(0));
    }

    // Importance
    score = score.saturating_add(importance.saturating_mul(weights::IMPORTANCE));
    explanation.push(format!("Importance {}/10", importance));

    // Effort / quick wins
    if estimated <= 2 {
        score = score.saturating_add(weights::QUICK_WIN);
        explanation.push("Quick win (low effort)".to_string());
    } else {
        score = score.saturating_sub(estimated.saturating_sub(2).saturating_mul(weights::EFFORT_PENALTY));
    }

    // Tasks that block others
    if !batch.is_empty() {
        if let Some(id) = &task.id {
            let blocked = graph::find_blockers(id, batch).len();
            if blocked > 0 {
                score = score.saturating_add(weights::DEPENDENCY_BLOCKER);
                explanation.push(format!("Blocks {} task(s)", blocked));
            }
        }
    }

    // Circular dependency detection
    if !batch.is_empty() {
        if let Some(id) = &task.id {
            let by_id = graph::index_by_id(batch);
            if graph::has_cycle(id, &by_id) {
                score = score.saturating_sub(weights::CIRCULAR);
                explanation.push("Circular dependency detected".to_string());
                flags.circular = true;
            }
        }
    }

    // Strategy overrides
    match strategy {
        Strategy::Fastest => {
            score = score.saturating_add(5i64.saturating_sub(estimated).max(0).saturating_mul(8));
            explanation.push("Strategy: Fastest Wins".to_string());
        }
        Strategy::Impact => {
            score = score.saturating_add(importance.saturating_mul(8));
            explanation.push("Strategy: High Impact".to_string());
        }
        Strategy::Deadline => {
            score = score.saturating_add(if days_until_due < 0 {
                50
            } else {
                (30 - days_until_due).max(0)
            });
            explanation.push("Strategy: Deadline Driven".to_string());
        }
        Strategy::Smart => {
            explanation.push("Strategy: Smart Balance".to_string());
        }
    }

    ScoreResult {
        score,
        explanation,
        flags,
    }
}
