//! Project-related API endpoints

use crate::SinterClient;
use crate::error::Result;
use sinter_core::domain::project::Project;

impl SinterClient {
    /// List all projects under the client's account
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let url = self.account_url("/projects/");
        self.get(&url).await
    }

    /// Get a single project
    ///
    /// # Arguments
    /// * `project_id` - The project to fetch
    pub async fn get_project(&self, project_id: u64) -> Result<Project> {
        let url = self.account_url(&format!("/projects/{}/", project_id));
        self.get(&url).await
    }
}
