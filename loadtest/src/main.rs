//! A concurrent HTTP GET load generator.
//!
//! Issues a fixed budget of requests against a target URL, all in flight at
//! once on a single-threaded runtime, and reports a live success ratio.
//! Budgets can be fanned out across independent worker processes with `-j`.
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

use anyhow::Result;

use loadtest::config::Args;
use loadtest::observability::initialize_tracing;
use loadtest::orchestrator;

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    initialize_tracing();

    let budget = args.budget()?;
    orchestrator::orchestrate(&args.path, budget)
}
