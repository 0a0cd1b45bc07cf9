//! Job definition API endpoints

use crate::SinterClient;
use crate::error::Result;
use sinter_core::domain::definition::JobDefinition;

impl SinterClient {
    /// List all job definitions for a project
    ///
    /// # Arguments
    /// * `project_id` - The project whose definitions to list
    pub async fn list_job_definitions(&self, project_id: u64) -> Result<Vec<JobDefinition>> {
        let url = self.account_url(&format!("/projects/{}/definitions/", project_id));
        self.get(&url).await
    }

    /// Get a single job definition
    pub async fn get_job_definition(
        &self,
        project_id: u64,
        definition_id: u64,
    ) -> Result<JobDefinition> {
        let url = self.account_url(&format!(
            "/projects/{}/definitions/{}/",
            project_id, definition_id
        ));
        self.get(&url).await
    }
}
