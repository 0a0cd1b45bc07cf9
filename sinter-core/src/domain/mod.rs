//! Core domain types
//!
//! These types mirror the entities exposed by the Sinter API. The remote
//! service owns all of them; this side only reads and classifies them.

pub mod definition;
pub mod project;
pub mod run;
