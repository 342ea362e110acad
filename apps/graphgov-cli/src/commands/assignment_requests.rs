//! `graphgov assignment-requests` commands

use clap::{Args, Subcommand};
use graphgov::models::AccessPackageRequestState;
use graphgov::GraphServiceClient;
use serde_json::json;
use tracing::info;

use crate::commands::graph_client;
use crate::error::{CliError, CliResult};
use crate::output::{print_json, print_success};

/// Access package assignment requests
#[derive(Args, Debug)]
pub struct AssignmentRequestsArgs {
    #[command(subcommand)]
    pub command: AssignmentRequestsCommands,
}

#[derive(Subcommand, Debug)]
pub enum AssignmentRequestsCommands {
    /// Cancel a request that has not been delivered yet
    Cancel(CancelArgs),
}

#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Assignment request ID
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AssignmentRequestsArgs) -> CliResult<()> {
    let client = graph_client()?;
    match args.command {
        AssignmentRequestsCommands::Cancel(cancel) => execute_cancel(&client, cancel).await,
    }
}

async fn execute_cancel(client: &GraphServiceClient, args: CancelArgs) -> CliResult<()> {
    let request = client
        .identity_governance()
        .entitlement_management()
        .assignment_requests()
        .by_id(args.id.as_str());

    let current = request
        .get(None)
        .await?
        .ok_or_else(|| CliError::NotFound(format!("assignment request {}", args.id)))?;
    if let Some(state) = current.state {
        if !is_cancellable(state) {
            return Err(CliError::Validation(format!(
                "Request {} is {state} and can no longer be cancelled.",
                args.id
            )));
        }
    }

    request.cancel().post(None).await?;
    info!(request_id = %args.id, "Assignment request cancelled");

    if args.json {
        return print_json(&json!({ "id": args.id, "cancelled": true }));
    }
    print_success(&format!("Assignment request {} cancelled", args.id));
    Ok(())
}

fn is_cancellable(state: AccessPackageRequestState) -> bool {
    matches!(
        state,
        AccessPackageRequestState::Submitted
            | AccessPackageRequestState::PendingApproval
            | AccessPackageRequestState::Scheduled
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cancellable() {
        assert!(is_cancellable(AccessPackageRequestState::PendingApproval));
        assert!(is_cancellable(AccessPackageRequestState::Scheduled));
        assert!(!is_cancellable(AccessPackageRequestState::Delivered));
        assert!(!is_cancellable(AccessPackageRequestState::Canceled));
    }
}
