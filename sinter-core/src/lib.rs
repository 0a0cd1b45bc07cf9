//! Sinter Core
//!
//! Core types shared by the Sinter client, runner and CLI.
//!
//! This crate contains:
//! - Domain types: the remote service's entities (Project, JobDefinition, JobRun)
//!   and the run status classification
//! - DTOs: response envelope handling for the service's JSON payloads

pub mod domain;
pub mod dto;
