//! Service layer
//!
//! Business logic on top of the repository: resolving a job by name,
//! triggering it and classifying how the run ended.

mod job_runner;

pub use job_runner::JobRunner;
