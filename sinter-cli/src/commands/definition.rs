//! Job definition command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use crate::config::Config;

/// Job definition subcommands
#[derive(Subcommand)]
pub enum DefinitionCommands {
    /// List job definitions in a project
    List {
        /// Project ID
        project_id: u64,
    },
    /// Get a single job definition
    Get {
        /// Project ID
        project_id: u64,
        /// Definition ID
        id: u64,
    },
}

/// Handle job definition commands
pub async fn handle_definition_command(
    command: DefinitionCommands,
    config: &Config,
) -> Result<()> {
    let client = config.client()?;

    match command {
        DefinitionCommands::List { project_id } => {
            let definitions = client.list_job_definitions(project_id).await?;

            if definitions.is_empty() {
                println!(
                    "{}",
                    format!("No job definitions found in project {}.", project_id).yellow()
                );
            } else {
                println!(
                    "{}",
                    format!(
                        "Found {} job definition(s) in project {}:",
                        definitions.len(),
                        project_id
                    )
                    .bold()
                );
                println!();
                for def in &definitions {
                    println!(
                        "  {} {} {}",
                        "▸".cyan(),
                        def.name.bold(),
                        format!("({})", def.id).dimmed()
                    );
                }
            }
        }
        DefinitionCommands::Get { project_id, id } => {
            let def = client.get_job_definition(project_id, id).await?;

            println!("{}", "Job Definition:".bold());
            println!("  ID:      {}", def.id.to_string().cyan());
            println!("  Name:    {}", def.name);
            println!("  Project: {}", project_id.to_string().dimmed());
            for (key, value) in &def.extra {
                println!("  {} = {}", key.cyan(), value);
            }
        }
    }

    Ok(())
}
