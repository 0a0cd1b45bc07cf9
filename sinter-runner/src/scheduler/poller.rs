//! Run poller
//!
//! Polls the API for a run's status until it is Success, Error or Cancelled.
//! Individual status fetches are retried a bounded number of times with a
//! fixed delay; the loop itself has no overall deadline.

use std::sync::Arc;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::config::PollConfig;
use crate::error::RunError;
use crate::repository::RunRepository;
use sinter_core::domain::run::JobRun;

/// Polls a single run to completion
pub struct RunPoller {
    repository: Arc<dyn RunRepository>,
    config: PollConfig,
}

impl RunPoller {
    /// Creates a new run poller
    pub fn new(repository: Arc<dyn RunRepository>, config: PollConfig) -> Self {
        Self { repository, config }
    }

    /// Fetches a run, retrying failed attempts
    ///
    /// Makes at most `max_tries` attempts, sleeping `retry_delay` between
    /// consecutive failures. Returns [`RunError::RetriesExhausted`] once every
    /// attempt has failed.
    ///
    /// No delay follows the last failed attempt, so N consecutive failures
    /// cost (N-1) x `retry_delay` rather than N x `retry_delay`.
    pub async fn fetch_run(&self, project_id: u64, run_id: u64) -> Result<JobRun, RunError> {
        let attempts = self.config.max_tries;

        for attempt in 1..=attempts {
            match self.repository.get_job_run(project_id, run_id).await {
                Ok(run) => return Ok(run),
                Err(e) => {
                    warn!(
                        "Failed to fetch status for run {} (attempt {}/{}): {}",
                        run_id, attempt, attempts, e
                    );

                    if attempt < attempts {
                        time::sleep(self.config.retry_delay).await;
                    }
                }
            }
        }

        error!(
            "Giving up on run {} after {} failed status fetches",
            run_id, attempts
        );
        Err(RunError::RetriesExhausted { run_id, attempts })
    }

    /// Blocks until the run reaches a terminal status
    ///
    /// Returns the final run payload as soon as a terminal status is
    /// observed, whatever that status is. Classification of the outcome is
    /// left to the caller.
    pub async fn wait_for_completion(
        &self,
        project_id: u64,
        run_id: u64,
    ) -> Result<JobRun, RunError> {
        info!(
            "Waiting for run {} (poll interval: {:?})",
            run_id, self.config.poll_interval
        );

        loop {
            let run = self.fetch_run(project_id, run_id).await?;
            let status = run.run_status();

            info!("Run {}: status {}", run_id, status);

            if status.is_terminal() {
                return Ok(run);
            }

            debug!("Run {} not finished, sleeping", run_id);
            time::sleep(self.config.poll_interval).await;
        }
    }
}
