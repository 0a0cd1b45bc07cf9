//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod definition;
mod project;
mod run;

pub use definition::DefinitionCommands;
pub use project::ProjectCommands;
pub use run::RunArgs;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use sinter_core::domain::run::RunStatus;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Trigger a job and block until it finishes
    Run(RunArgs),
    /// Show a run and its classified status
    RunStatus {
        /// Project the run belongs to
        project_id: u64,
        /// Run ID
        run_id: u64,
    },
    /// List the runs of a project
    RunList {
        /// Project ID
        project_id: u64,
    },
    /// Project inspection
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Job definition inspection
    Definition {
        #[command(subcommand)]
        command: DefinitionCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Run(args) => run::handle_run(args, config).await,
        Commands::RunStatus { project_id, run_id } => {
            run::show_run_status(config, project_id, run_id).await
        }
        Commands::RunList { project_id } => run::list_runs(config, project_id).await,
        Commands::Project { command } => project::handle_project_command(command, config).await,
        Commands::Definition { command } => {
            definition::handle_definition_command(command, config).await
        }
    }
}

/// Colorize a run status for display
pub(crate) fn colorize_status(status: RunStatus) -> ColoredString {
    let label = status.label();
    match status {
        RunStatus::Queued => label.yellow(),
        RunStatus::Running => label.cyan(),
        RunStatus::Success => label.green(),
        RunStatus::Error => label.red(),
        RunStatus::Cancelled => label.dimmed(),
        RunStatus::Unknown => label.magenta(),
    }
}
