//! Sinter operator
//!
//! The piece a workflow host schedules. Construction validates the required
//! settings; [`Task::execute`] runs the job and reports failures through
//! [`TaskFailure`].

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::config::{OperatorConfig, PollConfig};
use crate::error::{ConfigError, TaskFailure};
use crate::repository::RunRepository;
use crate::service::JobRunner;
use sinter_client::{DEFAULT_API_BASE, SinterClient};
use sinter_core::domain::run::JobRun;

/// A unit of work the host executes
#[async_trait]
pub trait Task: Send + Sync {
    /// Runs the task to completion
    async fn execute(&self) -> Result<JobRun, TaskFailure>;
}

/// Triggers a Sinter job and blocks until it succeeds
pub struct SinterOperator {
    token: String,
    account_id: u64,
    project_id: u64,
    job_name: String,
    api_base: String,
    poll: PollConfig,
}

impl SinterOperator {
    /// Validates `config` and builds the operator
    ///
    /// # Errors
    /// [`ConfigError::Missing`] for the first absent (or empty) required
    /// value, checked in the order token, account id, project id, job name.
    pub fn new(config: OperatorConfig) -> Result<Self, ConfigError> {
        let token = config
            .token
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::Missing("token"))?;
        let account_id = config.account_id.ok_or(ConfigError::Missing("account_id"))?;
        let project_id = config.project_id.ok_or(ConfigError::Missing("project_id"))?;
        let job_name = config
            .job_name
            .filter(|n| !n.is_empty())
            .ok_or(ConfigError::Missing("job_name"))?;

        let api_base = config
            .api_base
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "api_base must start with http:// or https://".to_string(),
            ));
        }

        config.poll.validate()?;

        Ok(Self {
            token,
            account_id,
            project_id,
            job_name,
            api_base,
            poll: config.poll,
        })
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn project_id(&self) -> u64 {
        self.project_id
    }

    /// Runs the job against an arbitrary repository
    pub async fn execute_with(
        &self,
        repository: Arc<dyn RunRepository>,
    ) -> Result<JobRun, TaskFailure> {
        info!(
            "Running job '{}' in project {}",
            self.job_name, self.project_id
        );

        let runner = JobRunner::new(repository, self.poll.clone());
        runner
            .run_job(self.project_id, &self.job_name)
            .await
            .map_err(|e| TaskFailure::from_run_error(&self.job_name, e))
    }
}

#[async_trait]
impl Task for SinterOperator {
    /// Builds a fresh client and runs the job with it
    async fn execute(&self) -> Result<JobRun, TaskFailure> {
        let client = SinterClient::with_base_url(&self.api_base, self.account_id, &self.token);
        self.execute_with(Arc::new(client)).await
    }
}
