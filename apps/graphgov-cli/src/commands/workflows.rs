//! `graphgov workflows` commands

use clap::{Args, Subcommand};
use graphgov::identity_governance::lifecycle_workflows::ActivatePostRequestBody;
use graphgov::models::Workflow;
use graphgov::GraphServiceClient;
use tracing::info;

use crate::commands::{fetch_list, graph_client, ListArgs};
use crate::error::{CliError, CliResult};
use crate::output::{format_time, or_dash, print_json, print_success, truncate};

/// Most subjects a single on-demand run accepts.
const MAX_ACTIVATE_SUBJECTS: usize = 10;

/// Lifecycle workflows
#[derive(Args, Debug)]
pub struct WorkflowsArgs {
    #[command(subcommand)]
    pub command: WorkflowsCommands,
}

#[derive(Subcommand, Debug)]
pub enum WorkflowsCommands {
    /// List lifecycle workflows
    List(ListArgs),

    /// Run a workflow on demand for specific users
    Activate(ActivateArgs),
}

#[derive(Args, Debug)]
pub struct ActivateArgs {
    /// Workflow ID
    pub id: String,

    /// User object ID to run the workflow for (repeatable)
    #[arg(long = "user", required = true)]
    pub users: Vec<String>,
}

impl ActivateArgs {
    fn validate(&self) -> CliResult<()> {
        if self.users.iter().any(|u| u.trim().is_empty()) {
            return Err(CliError::Validation("User IDs must not be empty.".to_string()));
        }
        if self.users.len() > MAX_ACTIVATE_SUBJECTS {
            return Err(CliError::Validation(format!(
                "At most {MAX_ACTIVATE_SUBJECTS} users can be activated at once."
            )));
        }
        Ok(())
    }
}

pub async fn execute(args: WorkflowsArgs) -> CliResult<()> {
    match args.command {
        WorkflowsCommands::List(list) => {
            let client = graph_client()?;
            execute_list(&client, list).await
        }
        WorkflowsCommands::Activate(activate) => {
            activate.validate()?;
            let client = graph_client()?;
            execute_activate(&client, activate).await
        }
    }
}

async fn execute_list(client: &GraphServiceClient, args: ListArgs) -> CliResult<()> {
    let builder = client
        .identity_governance()
        .lifecycle_workflows()
        .workflows();
    let workflows = fetch_list(&builder, &args).await?;

    if args.json {
        return print_json(&workflows);
    }

    if workflows.is_empty() {
        println!("No workflows found.");
        return Ok(());
    }

    print_table(&workflows);
    println!();
    println!("{} workflow(s)", workflows.len());
    Ok(())
}

async fn execute_activate(client: &GraphServiceClient, args: ActivateArgs) -> CliResult<()> {
    let body = ActivatePostRequestBody::for_users(args.users.iter().map(String::as_str));
    client
        .identity_governance()
        .lifecycle_workflows()
        .workflows()
        .by_id(args.id.as_str())
        .activate()
        .post(&body, None)
        .await?;

    info!(workflow_id = %args.id, subjects = args.users.len(), "Workflow activated");
    print_success(&format!(
        "Workflow {} activated for {} user(s)",
        args.id,
        args.users.len()
    ));
    Ok(())
}

fn print_table(workflows: &[Workflow]) {
    println!(
        "{:<38} {:<30} {:<8} {:<8} {:<8} {:<16}",
        "ID", "NAME", "CATEGORY", "ENABLED", "VERSION", "NEXT RUN"
    );
    println!("{}", "-".repeat(112));

    for workflow in workflows {
        let category = workflow
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let version = workflow
            .version
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<38} {:<30} {:<8} {:<8} {:<8} {:<16}",
            or_dash(workflow.entity.id.as_deref()),
            truncate(or_dash(workflow.display_name.as_deref()), 30),
            category,
            workflow.is_enabled.unwrap_or(false),
            version,
            format_time(workflow.next_schedule_run_date_time.as_ref()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activate(users: &[&str]) -> ActivateArgs {
        ActivateArgs {
            id: "wf1".to_string(),
            users: users.iter().map(|u| u.to_string()).collect(),
        }
    }

    #[test]
    fn test_activate_validation() {
        assert!(activate(&["u1", "u2"]).validate().is_ok());
        assert!(activate(&["u1", " "]).validate().is_err());

        let many: Vec<String> = (0..11).map(|i| format!("u{i}")).collect();
        let refs: Vec<&str> = many.iter().map(String::as_str).collect();
        assert!(matches!(
            activate(&refs).validate(),
            Err(CliError::Validation(_))
        ));
    }
}
