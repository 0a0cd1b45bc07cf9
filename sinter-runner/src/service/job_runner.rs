//! Job runner service
//!
//! Runs a job end to end:
//! - Resolving the job name to exactly one definition
//! - Triggering a run of that definition
//! - Polling the run to a terminal status
//! - Failing on anything but Success

use std::sync::Arc;
use tracing::{error, info};

use crate::config::PollConfig;
use crate::error::RunError;
use crate::repository::RunRepository;
use crate::scheduler::RunPoller;
use sinter_core::domain::definition::JobDefinition;
use sinter_core::domain::run::{JobRun, RunStatus};

/// Triggers job definitions and waits for their runs
pub struct JobRunner {
    repository: Arc<dyn RunRepository>,
    poller: RunPoller,
}

impl JobRunner {
    /// Creates a new job runner
    pub fn new(repository: Arc<dyn RunRepository>, config: PollConfig) -> Self {
        let poller = RunPoller::new(Arc::clone(&repository), config);
        Self { repository, poller }
    }

    /// Finds the single definition in `project_id` named `job_name`
    ///
    /// # Errors
    /// [`RunError::DefinitionLookup`] when zero or several definitions match.
    pub async fn resolve_definition(
        &self,
        project_id: u64,
        job_name: &str,
    ) -> Result<JobDefinition, RunError> {
        let definitions = self.repository.list_job_definitions(project_id).await?;

        let mut matches: Vec<JobDefinition> = definitions
            .into_iter()
            .filter(|d| d.is_named(job_name))
            .collect();

        if matches.len() != 1 {
            return Err(RunError::DefinitionLookup {
                job_name: job_name.to_string(),
                found: matches.len(),
            });
        }

        Ok(matches.remove(0))
    }

    /// Triggers `job_name` in `project_id` and blocks until its run finishes
    ///
    /// # Returns
    /// The final run payload when the run succeeded
    ///
    /// # Errors
    /// - Lookup errors, before anything is triggered
    /// - API and retry errors while triggering or polling
    /// - [`RunError::RunFailed`] when the run ends as Error or Cancelled
    pub async fn run_job(&self, project_id: u64, job_name: &str) -> Result<JobRun, RunError> {
        let definition = self.resolve_definition(project_id, job_name).await?;

        let triggered = self
            .repository
            .trigger_job_run(project_id, definition.id)
            .await?;
        info!(
            "Triggered run {} of job '{}' (definition {})",
            triggered.id, job_name, definition.id
        );

        let run = self
            .poller
            .wait_for_completion(project_id, triggered.id)
            .await?;

        match run.run_status() {
            RunStatus::Success => {
                info!("Run {} of job '{}' succeeded", run.id, job_name);
                Ok(run)
            }
            status => {
                error!("Run {} of job '{}' ended as {}", run.id, job_name, status);
                Err(RunError::RunFailed {
                    run_id: run.id,
                    status,
                })
            }
        }
    }
}
