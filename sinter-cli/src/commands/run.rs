//! Run command handlers
//!
//! `run` builds a [`SinterOperator`] from flags and environment and executes
//! it, acting as the host. `run-status` shows a single run and `run-list`
//! lists the runs of a project.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use sinter_runner::{OperatorConfig, PollConfig, SinterOperator, Task};
use std::time::Duration;

use super::colorize_status;
use crate::config::Config;

/// Arguments for `sinter run`
#[derive(Args)]
pub struct RunArgs {
    /// Project holding the job definition
    #[arg(long, env = "SINTER_PROJECT_ID")]
    pub project_id: Option<u64>,

    /// Name of the job definition to trigger
    #[arg(long, env = "SINTER_JOB_NAME")]
    pub job_name: Option<String>,

    /// Seconds between status checks (default: 30, or SINTER_POLL_INTERVAL)
    #[arg(long)]
    pub poll_interval: Option<u64>,

    /// Seconds to wait after a failed status check (default: 10, or SINTER_RETRY_DELAY)
    #[arg(long)]
    pub retry_delay: Option<u64>,

    /// Status check attempts before giving up (default: 3, or SINTER_MAX_TRIES)
    #[arg(long)]
    pub max_tries: Option<u32>,
}

impl RunArgs {
    /// Poll settings from the environment, overridden by explicit flags
    fn poll_config(&self) -> PollConfig {
        let mut poll = PollConfig::from_env();
        if let Some(secs) = self.poll_interval {
            poll.poll_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = self.retry_delay {
            poll.retry_delay = Duration::from_secs(secs);
        }
        if let Some(tries) = self.max_tries {
            poll.max_tries = tries;
        }
        poll
    }

    fn operator_config(&self, config: &Config) -> OperatorConfig {
        OperatorConfig {
            token: config.token.clone(),
            account_id: config.account_id,
            project_id: self.project_id,
            job_name: self.job_name.clone(),
            api_base: Some(config.api_base.clone()),
            poll: self.poll_config(),
        }
    }
}

/// Execute the operator and print the final run payload
pub async fn handle_run(args: RunArgs, config: &Config) -> Result<()> {
    let operator = SinterOperator::new(args.operator_config(config))?;

    let run = operator.execute().await?;

    eprintln!(
        "{} Run {} of '{}' finished: {}",
        "✓".green(),
        run.id,
        operator.job_name(),
        colorize_status(run.run_status())
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&run).context("Failed to encode run payload")?
    );

    Ok(())
}

/// Fetch and display a single run
pub async fn show_run_status(config: &Config, project_id: u64, run_id: u64) -> Result<()> {
    let client = config.client()?;
    let run = client
        .get_job_run(project_id, run_id)
        .await
        .with_context(|| format!("Failed to fetch run {}", run_id))?;

    println!("{}", "Run Details:".bold());
    println!("  ID:      {}", run.id.to_string().cyan());
    println!("  Project: {}", project_id.to_string().dimmed());
    println!(
        "  Status:  {} ({})",
        colorize_status(run.run_status()),
        run.status
    );

    if !run.extra.is_empty() {
        println!("\n{}", "Fields:".bold());
        for (key, value) in &run.extra {
            println!("  {} = {}", key.cyan(), value);
        }
    }

    Ok(())
}

/// List the runs of a project with their classified status
pub async fn list_runs(config: &Config, project_id: u64) -> Result<()> {
    let client = config.client()?;
    let runs = client
        .list_job_runs(project_id)
        .await
        .with_context(|| format!("Failed to list runs of project {}", project_id))?;

    if runs.is_empty() {
        println!("{}", "No runs found.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} run(s):", runs.len()).bold());
    println!();
    for run in &runs {
        println!(
            "  {} {} {} {}",
            "▸".cyan(),
            run.id.to_string().bold(),
            colorize_status(run.run_status()),
            format!("({})", run.status).dimmed()
        );
    }

    Ok(())
}
