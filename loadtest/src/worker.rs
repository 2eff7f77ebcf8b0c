//! One worker: dispatch a batch of concurrent GETs and fold every
//! completion into the running counters.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::time::timeout;
use yansi::Paint;

use crate::fetch::{self, Outcome};
use crate::progress::Progress;

/// Hard deadline for a single request, measured from its launch.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs one worker to completion on a fresh single-threaded runtime.
///
/// This is the whole lifecycle of a worker process: build the runtime, run
/// the batch, print the completion message. Individual request failures are
/// absorbed into the counters; only setup faults propagate.
pub fn run_worker(url: &str, count: usize) -> Result<()> {
    tracing::debug!(url, count, "worker starting");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build worker runtime")?;
    let progress = runtime.block_on(run_batch(url, count))?;

    println!("\nDone!");
    if progress.failed() > 0 {
        eprintln!(
            "{}",
            format!("{} FAILURES", progress.failed()).bold().red()
        );
    }
    Ok(())
}

/// Dispatches `count` requests and waits for all of them.
///
/// The HTTP client lives exactly as long as this future and is dropped on
/// every exit path. Failing to construct it is fatal for the worker.
pub async fn run_batch(url: &str, count: usize) -> Result<Progress> {
    let client = Client::builder()
        .build()
        .context("failed to create HTTP client")?;
    Ok(dispatch(&client, url, count, REQUEST_TIMEOUT).await)
}

/// Spawns `count` fetch tasks up front, then consumes their handles in
/// launch order.
///
/// All tasks run concurrently in the background; waiting in launch order
/// does not serialize them, it only fixes the order in which completions
/// reach the counters, so the progress stream advances in launch order.
/// Each task carries its own deadline, and a timeout cancels exactly that
/// task.
async fn dispatch(client: &Client, url: &str, count: usize, deadline: Duration) -> Progress {
    println!("Preparing requests");
    let tasks: Vec<_> = (0..count)
        .map(|_| {
            let client = client.clone();
            let url = url.to_owned();
            tokio::spawn(async move {
                match timeout(deadline, fetch::fetch(&client, &url)).await {
                    Ok(outcome) => outcome,
                    Err(_) => Outcome::TimedOut,
                }
            })
        })
        .collect();

    println!("Running requests.");
    let mut progress = Progress::new(count);
    for task in tasks {
        // A panicked or aborted task still counts as a completion.
        let outcome = task.await.unwrap_or(Outcome::ClientError);
        progress.record(outcome);
        progress.print();
    }
    progress
}
