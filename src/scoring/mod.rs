//! Task scoring core.
//!
//! Everything in here is pure computation over a single request batch:
//! no I/O, no shared state, no persistence. The engine scores one task at
//! a time against its siblings; the graph module supplies the dependency
//! analysis (cycle detection, blocker scan) the engine consumes.

mod engine;
mod graph;
mod task;

pub use engine::{score_task, ScoreResult, Strategy};
pub use graph::{find_blockers, has_cycle, index_by_id};
pub use task::{Flags, Task, TaskId};
