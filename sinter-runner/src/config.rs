//! Runner configuration
//!
//! Defines the poll timings and the settings an operator needs before it can
//! run a job.

use std::time::Duration;

use crate::error::ConfigError;

/// Timing for the status poll loop
///
/// The defaults match what the hosted API tolerates; tests and local
/// stand-ins shorten them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    /// Sleep between status checks while a run is not terminal
    pub poll_interval: Duration,

    /// Sleep after a failed status fetch before the next attempt
    pub retry_delay: Duration,

    /// Status fetch attempts before giving up on a run
    pub max_tries: u32,
}

impl PollConfig {
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(10);
    pub const DEFAULT_MAX_TRIES: u32 = 3;

    /// Creates configuration from environment variables
    ///
    /// Optional environment variables:
    /// - SINTER_POLL_INTERVAL (seconds, default: 30)
    /// - SINTER_RETRY_DELAY (seconds, default: 10)
    /// - SINTER_MAX_TRIES (default: 3)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`PollConfig::from_env`] with a custom variable lookup
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let poll_interval = lookup("SINTER_POLL_INTERVAL")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Self::DEFAULT_POLL_INTERVAL);

        let retry_delay = lookup("SINTER_RETRY_DELAY")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Self::DEFAULT_RETRY_DELAY);

        let max_tries = lookup("SINTER_MAX_TRIES")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(Self::DEFAULT_MAX_TRIES);

        Self {
            poll_interval,
            retry_delay,
            max_tries,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tries == 0 {
            return Err(ConfigError::Invalid(
                "max_tries must be greater than 0".to_string(),
            ));
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "poll_interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
            retry_delay: Self::DEFAULT_RETRY_DELAY,
            max_tries: Self::DEFAULT_MAX_TRIES,
        }
    }
}

/// Settings handed to [`crate::SinterOperator::new`]
///
/// The four identity fields are optional here so the operator can report
/// exactly which one is missing.
#[derive(Clone, Default)]
pub struct OperatorConfig {
    /// Sinter API token
    pub token: Option<String>,

    /// Sinter account id
    pub account_id: Option<u64>,

    /// Project holding the job definition
    pub project_id: Option<u64>,

    /// Name of the job definition to trigger
    pub job_name: Option<String>,

    /// Overrides the hosted API base URL
    pub api_base: Option<String>,

    pub poll: PollConfig,
}

impl OperatorConfig {
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_account_id(mut self, account_id: u64) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn with_project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn with_job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }
}

impl std::fmt::Debug for OperatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("account_id", &self.account_id)
            .field("project_id", &self.project_id)
            .field("job_name", &self.job_name)
            .field("api_base", &self.api_base)
            .field("poll", &self.poll)
            .finish()
    }
}
