//! # taskrank
//!
//! HTTP service that assigns a priority score to to-do tasks and returns
//! them ranked.
//!
//! Scoring combines four factors:
//! - urgency (how close or past the due date is)
//! - importance (caller-supplied 1-10 weight)
//! - effort (quick wins boosted, large tasks penalized)
//! - dependencies (tasks that block others boosted, tasks on a
//!   dependency cycle penalized)
//!
//! ## Request Flow
//! 1. Receive a batch of tasks via the API
//! 2. Score every task against the whole batch
//! 3. Sort descending by score and return
//!
//! Scoring is a pure function of the batch: nothing is persisted and no
//! state survives a request.
//!
//! ## Modules
//! - `api`: axum routes and request/response types
//! - `scoring`: the scoring engine and dependency-graph analysis
//! - `config`: environment-driven server configuration

pub mod api;
pub mod config;
pub mod scoring;

pub use config::Config;
