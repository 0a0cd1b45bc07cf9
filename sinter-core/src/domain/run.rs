//! Job run domain model
//!
//! A run is one execution of a job definition. The API reports its state as
//! an integer code which [`RunStatus::from_code`] maps onto a small set of
//! lifecycle labels.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One execution of a job definition
///
/// Everything besides `id` and `status` is kept in `extra` so the payload
/// handed back to callers is the full object the API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRun {
    pub id: u64,

    /// Raw status code as reported by the API
    pub status: i64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobRun {
    /// Classified status of this run
    pub fn run_status(&self) -> RunStatus {
        RunStatus::from_code(self.status)
    }
}

/// Response to a trigger call
///
/// Only the new run's id is required; the run may not report a status yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggeredRun {
    pub id: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Lifecycle label for a run status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunStatus {
    Queued,
    Running,
    Success,
    Error,
    Cancelled,
    /// Any code outside the known set
    Unknown,
}

impl RunStatus {
    pub const QUEUED: i64 = 1;
    pub const DEQUEUED: i64 = 2;
    pub const RUNNING: i64 = 3;
    pub const SUCCESS: i64 = 10;
    pub const ERROR: i64 = 20;
    pub const CANCELLED: i64 = 30;

    /// Classifies a raw status code. Never fails.
    pub fn from_code(code: i64) -> Self {
        match code {
            Self::QUEUED | Self::DEQUEUED => RunStatus::Queued,
            Self::RUNNING => RunStatus::Running,
            Self::SUCCESS => RunStatus::Success,
            Self::ERROR => RunStatus::Error,
            Self::CANCELLED => RunStatus::Cancelled,
            _ => RunStatus::Unknown,
        }
    }

    /// Success, Error and Cancelled end polling
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunStatus::Success | RunStatus::Error | RunStatus::Cancelled
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunStatus::Queued => "Queued",
            RunStatus::Running => "Running",
            RunStatus::Success => "Success",
            RunStatus::Error => "Error",
            RunStatus::Cancelled => "Cancelled",
            RunStatus::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
