//! `graphgov access-reviews` commands

use clap::{Args, Subcommand};
use graphgov::models::{
    AccessReviewScheduleDefinition, AccessReviewScheduleDefinitionFilterByCurrentUserOptions,
};
use graphgov::GraphServiceClient;

use crate::commands::{fetch_list, graph_client, ListArgs};
use crate::error::CliResult;
use crate::output::{format_time, or_dash, print_json, truncate};

/// Access review schedule definitions
#[derive(Args, Debug)]
pub struct AccessReviewsArgs {
    #[command(subcommand)]
    pub command: AccessReviewsCommands,
}

#[derive(Subcommand, Debug)]
pub enum AccessReviewsCommands {
    /// List access review definitions
    List(ListReviewsArgs),
}

#[derive(Args, Debug)]
pub struct ListReviewsArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Only definitions where the signed-in principal is a reviewer
    #[arg(long)]
    pub mine: bool,
}

pub async fn execute(args: AccessReviewsArgs) -> CliResult<()> {
    let client = graph_client()?;
    match args.command {
        AccessReviewsCommands::List(list) => execute_list(&client, list).await,
    }
}

async fn execute_list(client: &GraphServiceClient, args: ListReviewsArgs) -> CliResult<()> {
    let definitions = client.identity_governance().access_reviews().definitions();

    let reviews = if args.mine {
        args.list.validate()?;
        definitions
            .filter_by_current_user(AccessReviewScheduleDefinitionFilterByCurrentUserOptions::Reviewer)
            .get(Some(&args.list.query()))
            .await?
            .map(|page| page.value)
            .unwrap_or_default()
    } else {
        fetch_list(&definitions, &args.list).await?
    };

    if args.list.json {
        return print_json(&reviews);
    }

    if reviews.is_empty() {
        println!("No access reviews found.");
        return Ok(());
    }

    print_table(&reviews);
    println!();
    println!("{} access review(s)", reviews.len());
    Ok(())
}

fn print_table(reviews: &[AccessReviewScheduleDefinition]) {
    println!("{:<38} {:<32} {:<12} {:<16}", "ID", "NAME", "STATUS", "CREATED");
    println!("{}", "-".repeat(100));

    for review in reviews {
        println!(
            "{:<38} {:<32} {:<12} {:<16}",
            or_dash(review.entity.id.as_deref()),
            truncate(or_dash(review.display_name.as_deref()), 32),
            or_dash(review.status.as_deref()),
            format_time(review.created_date_time.as_ref()),
        );
    }
}
