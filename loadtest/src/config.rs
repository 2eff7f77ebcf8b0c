//! CLI arguments and the request budget they define.

use anyhow::{Result, bail};
use argh::FromArgs;

/// Fire a budget of concurrent GET requests at a target URL and report the
/// running success ratio.
#[derive(Debug, FromArgs)]
pub struct Args {
    /// total number of requests to issue
    #[argh(option, short = 'n', default = "10000")]
    pub number: usize,

    /// number of worker processes to spread the budget across
    #[argh(option, short = 'j', default = "1")]
    pub processes: usize,

    /// target URL
    #[argh(
        option,
        short = 'p',
        default = "String::from(\"http://localhost:1234/hi\")"
    )]
    pub path: String,
}

impl Args {
    /// The budget this invocation defines.
    pub fn budget(&self) -> Result<Budget> {
        Budget::new(self.number, self.processes)
    }
}

/// The request budget for one run: `total` requests spread across
/// `workers` processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    /// Total number of requests for the whole run.
    pub total: usize,
    /// Number of workers, including the one running in the calling process.
    pub workers: usize,
}

impl Budget {
    /// Creates a budget, rejecting a zero worker count.
    pub fn new(total: usize, workers: usize) -> Result<Self> {
        if workers == 0 {
            bail!("worker count must be at least 1");
        }
        Ok(Self { total, workers })
    }

    /// Requests each worker receives.
    ///
    /// Truncating division: when `total` does not divide evenly, up to
    /// `workers - 1` requests from the budget are never issued.
    pub fn per_worker(&self) -> usize {
        self.total / self.workers
    }

    /// Requests from the budget that no worker will issue.
    pub fn shortfall(&self) -> usize {
        self.total - self.per_worker() * self.workers
    }
}
