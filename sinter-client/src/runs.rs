//! Job run API endpoints

use crate::SinterClient;
use crate::error::Result;
use sinter_core::domain::run::{JobRun, TriggeredRun};

impl SinterClient {
    // =============================================================================
    // Run Query
    // =============================================================================

    /// List runs for a project
    pub async fn list_job_runs(&self, project_id: u64) -> Result<Vec<JobRun>> {
        let url = self.account_url(&format!("/projects/{}/runs/", project_id));
        self.get(&url).await
    }

    /// Get a run by ID
    ///
    /// # Arguments
    /// * `project_id` - The project the run belongs to
    /// * `run_id` - The run to fetch
    ///
    /// # Returns
    /// The run, including its current status code
    pub async fn get_job_run(&self, project_id: u64, run_id: u64) -> Result<JobRun> {
        let url = self.account_url(&format!("/projects/{}/runs/{}/", project_id, run_id));
        self.get(&url).await
    }

    // =============================================================================
    // Run Lifecycle
    // =============================================================================

    /// Trigger a new run of a job definition
    ///
    /// The API must answer `201 Created`. Only the new run's id is required
    /// in the response.
    ///
    /// # Example
    /// ```no_run
    /// # use sinter_client::SinterClient;
    /// # async fn example() -> sinter_client::Result<()> {
    /// let client = SinterClient::new(1234, "api-token");
    /// let run = client.trigger_job_run(10, 77).await?;
    /// println!("started run {}", run.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn trigger_job_run(
        &self,
        project_id: u64,
        definition_id: u64,
    ) -> Result<TriggeredRun> {
        let url = self.account_url(&format!(
            "/projects/{}/definitions/{}/runs/",
            project_id, definition_id
        ));
        self.post(&url).await
    }
}
