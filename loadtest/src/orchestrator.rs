//! Process fan-out: split the budget across isolated worker processes.

use std::env;
use std::process::{Child, Command, Stdio};

use anyhow::{Context, Result};

use crate::config::Budget;
use crate::worker;

/// Runs the whole budget, fanning out across processes when requested.
///
/// With a single worker the current process runs the batch directly and no
/// processes are spawned. Otherwise `workers - 1` children are started
/// first, the calling process runs its own share inline, and every child is
/// awaited before the run is reported complete. Workers share nothing; each
/// prints its own progress stream, and with several workers those streams
/// interleave on shared output.
pub fn orchestrate(url: &str, budget: Budget) -> Result<()> {
    if budget.workers == 1 {
        return worker::run_worker(url, budget.total);
    }

    let per_worker = budget.per_worker();
    if budget.shortfall() > 0 {
        tracing::debug!(
            dropped = budget.shortfall(),
            "budget does not divide evenly across workers"
        );
    }

    let children = spawn_workers(url, per_worker, budget.workers - 1)?;
    // An inline worker fault propagates only after every child is reaped.
    let inline = worker::run_worker(url, per_worker);

    println!("\n Waiting for other processes.");
    reap(children);
    inline?;
    println!("Done!");
    Ok(())
}

/// Re-invokes the current executable once per extra worker.
///
/// Each child gets the same URL and the per-worker share of the budget,
/// with `-j 1` so it runs its batch inline instead of fanning out again.
/// Children inherit stdout and stderr.
fn spawn_workers(url: &str, per_worker: usize, count: usize) -> Result<Vec<Child>> {
    let exe = env::current_exe().context("failed to locate current executable")?;
    let mut children = Vec::with_capacity(count);
    for _ in 0..count {
        let child = Command::new(&exe)
            .arg("-n")
            .arg(per_worker.to_string())
            .arg("-j")
            .arg("1")
            .arg("-p")
            .arg(url)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .context("failed to spawn worker process")?;
        children.push(child);
    }
    Ok(children)
}

/// Waits for every child to exit, returning how many exited non-zero.
///
/// A failing child does not fail the run: its exit status is logged and the
/// remaining children are still awaited, so no process is left orphaned.
fn reap(children: Vec<Child>) -> usize {
    let mut failures = 0;
    for mut child in children {
        match child.wait() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                tracing::warn!(%status, "worker process exited with failure");
                failures += 1;
            }
            Err(err) => {
                tracing::warn!("failed to wait for worker process: {err}");
                failures += 1;
            }
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn reap_waits_every_child_and_counts_failures() {
        let children = vec![
            Command::new("true").spawn().expect("spawn true"),
            Command::new("false").spawn().expect("spawn false"),
            Command::new("true").spawn().expect("spawn true"),
        ];
        assert_eq!(reap(children), 1);
    }
}
