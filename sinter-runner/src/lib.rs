//! Sinter Runner
//!
//! Triggers a job definition on the Sinter API and blocks until the run
//! reaches a terminal status.
//!
//! Architecture:
//! - Configuration: poll timings and the operator's required settings
//! - Repository: the narrow slice of the API the runner depends on
//! - Scheduler: bounded-retry status fetch and the poll-until-terminal loop
//! - Service: `run_job` orchestration (resolve, trigger, wait, classify)
//! - Operator: the task a workflow host executes
//!
//! Everything runs sequentially on the caller's task. The only suspension
//! points are the HTTP calls and the fixed sleeps between them.

pub mod config;
pub mod error;
pub mod operator;
pub mod repository;
pub mod scheduler;
pub mod service;

pub use config::{OperatorConfig, PollConfig};
pub use error::{ConfigError, RunError, TaskFailure};
pub use operator::{SinterOperator, Task};
pub use repository::RunRepository;
pub use scheduler::RunPoller;
pub use service::JobRunner;
