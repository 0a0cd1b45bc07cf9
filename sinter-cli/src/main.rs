//! Sinter CLI
//!
//! Command-line host for the Sinter operator: runs a job to completion and
//! offers a few read-only views of the account.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sinter")]
#[command(about = "Trigger Sinter jobs and wait for them to finish", long_about = None)]
struct Cli {
    /// Sinter API token
    #[arg(long, env = "SINTER_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Sinter account id
    #[arg(long, env = "SINTER_ACCOUNT_ID", global = true)]
    account_id: Option<u64>,

    /// API base URL
    #[arg(
        long,
        env = "SINTER_API_BASE",
        default_value = sinter_client::DEFAULT_API_BASE,
        global = true
    )]
    api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so command output stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "sinter_cli=info,sinter_runner=info,sinter_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        token: cli.token,
        account_id: cli.account_id,
        api_base: cli.api_base,
    };
    tracing::debug!("Using Sinter API at {}", config.api_base);

    handle_command(cli.command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::try_parse_from([
            "sinter",
            "--token",
            "t",
            "--account-id",
            "4",
            "run",
            "--project-id",
            "9",
            "--job-name",
            "nightly",
        ])
        .unwrap();

        assert_eq!(cli.token.as_deref(), Some("t"));
        assert_eq!(cli.account_id, Some(4));
        assert!(matches!(
            cli.command,
            Commands::Run(ref args) if args.project_id == Some(9)
                && args.job_name.as_deref() == Some("nightly")
        ));
    }

    #[test]
    fn test_parse_run_status() {
        let cli = Cli::try_parse_from(["sinter", "run-status", "9", "900"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::RunStatus {
                project_id: 9,
                run_id: 900
            }
        ));
    }

    #[test]
    fn test_parse_run_list() {
        let cli = Cli::try_parse_from(["sinter", "run-list", "9"]).unwrap();
        assert!(matches!(cli.command, Commands::RunList { project_id: 9 }));
    }
}
