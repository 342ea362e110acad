//! graphgov CLI - identity governance from the terminal
//!
//! Uses app-only credentials read from `GRAPHGOV_*` environment variables
//! (or a `.env` file) to:
//! - List and inspect entitlement management access packages
//! - List access review definitions
//! - List and run lifecycle workflows
//! - Cancel pending access package assignment requests

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use error::CliResult;

/// graphgov CLI - Microsoft Graph identity governance
#[derive(Parser)]
#[command(name = "graphgov")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log filter, e.g. "debug" or "graphgov_http=trace"
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage entitlement management access packages
    AccessPackages(commands::access_packages::AccessPackagesArgs),

    /// Inspect access reviews
    AccessReviews(commands::access_reviews::AccessReviewsArgs),

    /// Manage lifecycle workflows
    Workflows(commands::workflows::WorkflowsArgs),

    /// Manage access package assignment requests
    AssignmentRequests(commands::assignment_requests::AssignmentRequestsArgs),
}

#[tokio::main]
async fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(&cli.log);

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::AccessPackages(args) => commands::access_packages::execute(args).await,
        Commands::AccessReviews(args) => commands::access_reviews::execute(args).await,
        Commands::Workflows(args) => commands::workflows::execute(args).await,
        Commands::AssignmentRequests(args) => commands::assignment_requests::execute(args).await,
    }
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
    fn test_parse_workflow_activate() {
        let cli = Cli::try_parse_from([
            "graphgov", "workflows", "activate", "wf1", "--user", "u1", "--user", "u2",
        ])
        .unwrap();
        match cli.command {
            Commands::Workflows(args) => match args.command {
                commands::workflows::WorkflowsCommands::Activate(activate) => {
                    assert_eq!(activate.id, "wf1");
                    assert_eq!(activate.users, ["u1", "u2"]);
                }
                other => panic!("unexpected subcommand {other:?}"),
            },
            _ => panic!("expected workflows command"),
        }
    }

    #[test]
    fn test_parse_list_flags() {
        let cli = Cli::try_parse_from([
            "graphgov",
            "access-packages",
            "list",
            "--filter",
            "isHidden eq false",
            "--top",
            "10",
            "--all",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::AccessPackages(args) => match args.command {
                commands::access_packages::AccessPackagesCommands::List(list) => {
                    assert_eq!(list.filter.as_deref(), Some("isHidden eq false"));
                    assert_eq!(list.top, 10);
                    assert!(list.all && list.json);
                }
                other => panic!("unexpected subcommand {other:?}"),
            },
            _ => panic!("expected access-packages command"),
        }
    }

    #[test]
    fn test_activate_requires_user() {
        assert!(Cli::try_parse_from(["graphgov", "workflows", "activate", "wf1"]).is_err());
    }
}
