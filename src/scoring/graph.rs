//! Dependency-graph analysis over a request batch.
//!
//! The batch submitted with a request is the whole universe: dependency
//! ids that do not resolve to a task in the batch are treated as leaves,
//! not errors.

use std::collections::{HashMap, HashSet};

use super::{Task, TaskId};

/// Index a batch by task id. Tasks without an id are not indexed and so
/// cannot participate in cycles.
pub fn index_by_id(batch: &[Task]) -> HashMap<&TaskId, &Task> {
    batch
        .iter()
        .filter_map(|t| t.id.as_ref().map(|id| (id, t)))
        .collect()
}

/// Returns true iff a dependency cycle is reachable from `start`.
///
/// Iterative depth-first search with an explicit stack; an edge back to a
/// node still on the active path is a cycle. Bookkeeping sets are
/// allocated fresh per call, so concurrent or repeated calls never
/// observe each other's state.
pub fn has_cycle<'a>(start: &'a TaskId, tasks_by_id: &HashMap<&'a TaskId, &'a Task>) -> bool {
    enum Step<'s> {
        Enter(&'s TaskId),
        Leave(&'s TaskId),
    }

    let mut visited: HashSet<&TaskId> = HashSet::new();
    let mut on_path: HashSet<&TaskId> = HashSet::new();
    let mut stack = vec![Step::Enter(start)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(id) => {
                if on_path.contains(id) {
                    return true;
                }
                if !visited.insert(id) {
                    continue;
                }
                on_path.insert(id);
                stack.push(Step::Leave(id));
                // Unresolved ids are leaves.
                if let Some(task) = tasks_by_id.get(id) {
                    for dep in &task.dependencies {
                        stack.push(Step::Enter(dep));
                    }
                }
            }
            Step::Leave(id) => {
                on_path.remove(id);
            }
        }
    }

    false
}

/// Returns every task in `batch` whose dependencies contain `id` - what
/// would stall if this task stalls. Direct reverse edges only; no
/// traversal.
pub fn find_blockers<'a>(id: &TaskId, batch: &'a [Task]) -> Vec<&'a Task> {
    batch
        .iter()
        .filter(|t| t.dependencies.iter().any(|dep| dep == id))
        .collect()
}
