//! Project command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use sinter_core::domain::project::Project;

use crate::config::Config;

/// Project subcommands
#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects in the account
    List,
    /// Get project details
    Get {
        /// Project ID
        id: u64,
    },
}

/// Handle project commands
pub async fn handle_project_command(command: ProjectCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        ProjectCommands::List => {
            let projects = client.list_projects().await?;

            if projects.is_empty() {
                println!("{}", "No projects found.".yellow());
            } else {
                println!("{}", format!("Found {} project(s):", projects.len()).bold());
                println!();
                for project in &projects {
                    print_project_summary(project);
                }
            }
        }
        ProjectCommands::Get { id } => {
            let project = client.get_project(id).await?;
            print_project_details(&project);
        }
    }

    Ok(())
}

fn print_project_summary(project: &Project) {
    println!(
        "  {} {} {}",
        "▸".cyan(),
        project.name.bold(),
        format!("({})", project.id).dimmed()
    );
}

fn print_project_details(project: &Project) {
    println!("{}", "Project Details:".bold());
    println!("  ID:   {}", project.id.to_string().cyan());
    println!("  Name: {}", project.name);

    for (key, value) in &project.extra {
        println!("  {} = {}", key.cyan(), value);
    }
}
