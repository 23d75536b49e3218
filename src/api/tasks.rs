//! Scoring endpoints: analyze a whole batch or suggest the top picks.

use axum::extract::Query;
use axum::Json;
use chrono::Local;
use tracing::debug;

use crate::scoring::{self, Strategy, Task, TaskId};

use super::types::{AnalyzeQuery, ScoredTask, Suggestion};

/// How many tasks the suggest endpoint returns.
const SUGGESTION_COUNT: usize = 3;

/// Keys the response computes itself. Caller-supplied copies are dropped
/// so the serialized output carries each exactly once.
const RESERVED_KEYS: [&str; 3] = ["score", "explanation", "flags"];

/// POST /api/tasks/analyze
///
/// Accepts a JSON array of tasks, scores each one against the full batch
/// under the selected strategy, and returns the array sorted descending
/// by score.
pub async fn analyze(
    Query(query): Query<AnalyzeQuery>,
    Json(tasks): Json<Vec<Task>>,
) -> Json<Vec<ScoredTask>> {
    let strategy = Strategy::from_param(query.strategy.as_deref());
    debug!(
        "Analyzing {} task(s) with strategy {:?}",
        tasks.len(),
        strategy
    );
    Json(score_batch(tasks, strategy))
}

/// POST /api/tasks/suggest
///
/// Same input contract as analyze, but always scores with the smart
/// strategy and returns only the top 3 as a reduced projection with the
/// explanation collapsed into one `reason` string.
pub async fn suggest(Json(tasks): Json<Vec<Task>>) -> Json<Vec<Suggestion>> {
    debug!("Suggesting from {} task(s)", tasks.len());

    let mut scored = score_batch(tasks, Strategy::Smart);
    scored.truncate(SUGGESTION_COUNT);

    let suggestions = scored
        .into_iter()
        .map(|s| Suggestion {
            id: s.task.id,
            title: s.task.title,
            due_date: s.task.due_date,
            estimated_hours: s.task.estimated_hours,
            importance: s.task.importance,
            score: s.score,
            reason: s.explanation.join("; "),
            flags: s.flags,
        })
        .collect();
    Json(suggestions)
}

/// Assign missing ids, score every task against the batch, and sort
/// descending by score. The sort is stable, so equal scores keep their
/// input order.
fn score_batch(mut tasks: Vec<Task>, strategy: Strategy) -> Vec<ScoredTask> {
    assign_ids(&mut tasks);
    strip_reserved_keys(&mut tasks);
    let today = Local::now().date_naive();

    let mut scored: Vec<ScoredTask> = tasks
        .iter()
        .map(|task| {
            let result = scoring::score_task(task, &tasks, strategy, today);
            ScoredTask {
                task: task.clone(),
                score: result.score,
                explanation: result.explanation,
                flags: result.flags,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Give each task without an id a sequential one: position in the input
/// plus one.
fn assign_ids(tasks: &mut [Task]) {
    for (index, task) in tasks.iter_mut().enumerate() {
        if task.id.is_none() {
            task.id = Some(TaskId::Int(index as i64 + 1));
        }
    }
}

/// Drop stale scoring output a caller may have echoed back in, so the
/// flattened task and the computed fields never produce duplicate keys.
fn strip_reserved_keys(tasks: &mut [Task]) {
    for task in tasks.iter_mut() {
        for key in RESERVED_KEYS {
            task.extra.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn untitled(due: &str) -> Task {
        Task {
            id: None,
            title: None,
            due_date: Some(due.to_string()),
            estimated_hours: None,
            importance: None,
            dependencies: vec![],
            extra: Default::default(),
        }
    }

    #[test]
    fn test_assign_ids_is_positional() {
        let mut tasks = vec![
            untitled("2030-01-01"),
            Task {
                id: Some(TaskId::from("deploy")),
                ..untitled("2030-01-01")
            },
            untitled("2030-01-01"),
        ];
        assign_ids(&mut tasks);
        assert_eq!(tasks[0].id, Some(TaskId::Int(1)));
        assert_eq!(tasks[1].id, Some(TaskId::from("deploy")));
        assert_eq!(tasks[2].id, Some(TaskId::Int(3)));
    }

    #[test]
    fn test_caller_supplied_result_keys_are_replaced() {
        let mut task = untitled("2000-01-01");
        task.extra
            .insert("score".to_string(), serde_json::json!(999));
        task.extra
            .insert("explanation".to_string(), serde_json::json!(["stale"]));
        task.extra
            .insert("flags".to_string(), serde_json::json!({}));
        task.extra
            .insert("notes".to_string(), serde_json::json!("kept"));

        let scored = score_batch(vec![task], Strategy::Smart);
        assert!(scored[0].task.extra.get("score").is_none());
        assert!(scored[0].task.extra.get("explanation").is_none());
        assert!(scored[0].task.extra.get("flags").is_none());
        assert_eq!(
            scored[0].task.extra.get("notes"),
            Some(&serde_json::json!("kept"))
        );

        // Each computed key appears exactly once in the output.
        let rendered = serde_json::to_string(&scored[0]).unwrap();
        assert_eq!(rendered.matches("\"score\"").count(), 1);
        assert_eq!(rendered.matches("\"explanation\"").count(), 1);
        assert_ne!(scored[0].score, 999);
    }

    #[test]
    fn test_score_batch_sorts_descending_and_stable() {
        // Identical tasks tie; an overdue one must rank first.
        let tasks = vec![
            untitled("2030-01-01"),
            untitled("2030-01-01"),
            untitled("2000-01-01"),
        ];
        let scored = score_batch(tasks, Strategy::Smart);
        assert_eq!(scored[0].task.id, Some(TaskId::Int(3)));
        assert!(scored[0].score > scored[1].score);
        // Stable tie-break keeps input order for the equal pair.
        assert_eq!(scored[1].task.id, Some(TaskId::Int(1)));
        assert_eq!(scored[2].task.id, Some(TaskId::Int(2)));
    }
}
