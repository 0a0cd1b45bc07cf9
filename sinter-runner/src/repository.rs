//! Repository layer
//!
//! The runner only needs three calls from the API. They sit behind a trait
//! so the poll loop and orchestration can be exercised without a server.

use async_trait::async_trait;
use sinter_client::{ClientError, SinterClient};
use sinter_core::domain::definition::JobDefinition;
use sinter_core::domain::run::{JobRun, TriggeredRun};

/// Repository trait for the run lifecycle calls
#[async_trait]
pub trait RunRepository: Send + Sync {
    /// Lists the job definitions of a project
    async fn list_job_definitions(&self, project_id: u64)
    -> Result<Vec<JobDefinition>, ClientError>;

    /// Starts a run of a definition
    async fn trigger_job_run(
        &self,
        project_id: u64,
        definition_id: u64,
    ) -> Result<TriggeredRun, ClientError>;

    /// Fetches a run's current state
    async fn get_job_run(&self, project_id: u64, run_id: u64) -> Result<JobRun, ClientError>;
}

#[async_trait]
impl RunRepository for SinterClient {
    async fn list_job_definitions(
        &self,
        project_id: u64,
    ) -> Result<Vec<JobDefinition>, ClientError> {
        SinterClient::list_job_definitions(self, project_id).await
    }

    async fn trigger_job_run(
        &self,
        project_id: u64,
        definition_id: u64,
    ) -> Result<TriggeredRun, ClientError> {
        SinterClient::trigger_job_run(self, project_id, definition_id).await
    }

    async fn get_job_run(&self, project_id: u64, run_id: u64) -> Result<JobRun, ClientError> {
        SinterClient::get_job_run(self, project_id, run_id).await
    }
}
