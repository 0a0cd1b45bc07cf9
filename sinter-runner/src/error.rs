//! Error types for the runner

use sinter_client::ClientError;
use sinter_core::domain::run::RunStatus;
use thiserror::Error;

/// Errors raised while running a job
#[derive(Debug, Error)]
pub enum RunError {
    /// A single API call failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Every status fetch attempt for a run failed
    #[error("Too many failures ({attempts}) while querying status for run {run_id}")]
    RetriesExhausted { run_id: u64, attempts: u32 },

    /// The job name did not resolve to exactly one definition
    #[error("{found} jobs found for {job_name}")]
    DefinitionLookup { job_name: String, found: usize },

    /// The run finished with a non-success terminal status
    #[error("Run {run_id} failed with status: {status}")]
    RunFailed { run_id: u64, status: RunStatus },
}

impl RunError {
    /// API and retry failures, as opposed to lookup and run outcomes
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Client(_) | Self::RetriesExhausted { .. })
    }
}

/// Invalid or incomplete operator configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{}", missing_message(.0))]
    Missing(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn missing_message(field: &str) -> String {
    match field {
        "token" => "No valid Sinter token was supplied.".to_string(),
        "account_id" => "No valid account id was supplied.".to_string(),
        "project_id" => "No valid project id was supplied.".to_string(),
        "job_name" => "No job name was supplied.".to_string(),
        other => format!("No {} was supplied.", other),
    }
}

/// Failure signal handed back to the workflow host
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TaskFailure {
    message: String,
    #[source]
    source: Option<RunError>,
}

impl TaskFailure {
    /// Wraps a run error raised while running `job_name`
    ///
    /// API and retry failures are prefixed with the job name; lookup and
    /// run-outcome errors keep their own message.
    pub fn from_run_error(job_name: &str, err: RunError) -> Self {
        let message = if err.is_transient() {
            format!("Error while running job {}: {}", job_name, err)
        } else {
            err.to_string()
        };

        Self {
            message,
            source: Some(err),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The run error behind this failure, if any
    pub fn run_error(&self) -> Option<&RunError> {
        self.source.as_ref()
    }
}
