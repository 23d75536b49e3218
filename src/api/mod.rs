//! HTTP API for taskrank.
//!
//! ## Endpoints
//!
//! - `POST /api/tasks/analyze` - Score a batch of tasks, return it ranked
//! - `POST /api/tasks/suggest` - Return the top 3 tasks from a batch
//! - `GET /api/health` - Health check

mod routes;
mod tasks;
pub mod types;

pub use routes::{router, serve};
