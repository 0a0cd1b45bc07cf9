//! Scheduler module
//!
//! Watches a triggered run until it reaches a terminal status.

pub mod poller;

pub use poller::RunPoller;
