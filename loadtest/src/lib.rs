//! A small concurrent HTTP load generator.
//!
//! The tool fires a fixed budget of `GET` requests at a target URL, keeps
//! all of them in flight at once on a single-threaded runtime, and reports
//! a live success ratio as requests complete. Budgets beyond what one event
//! loop can sustain are fanned out across independent worker processes,
//! each with its own counters and its own progress stream.
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod fetch;
pub mod observability;
pub mod orchestrator;
pub mod progress;
pub mod worker;

pub use crate::config::{Args, Budget};
pub use crate::orchestrator::orchestrate;
pub use crate::worker::run_worker;
