//! `graphgov access-packages` commands

use clap::{Args, Subcommand};
use graphgov::models::AccessPackage;
use graphgov::{GraphServiceClient, ItemQueryParameters, RequestConfiguration};

use crate::commands::{fetch_list, graph_client, ListArgs};
use crate::error::{CliError, CliResult};
use crate::output::{format_time, or_dash, print_json, print_key_value, print_section, truncate};

/// Entitlement management access packages
#[derive(Args, Debug)]
pub struct AccessPackagesArgs {
    #[command(subcommand)]
    pub command: AccessPackagesCommands,
}

#[derive(Subcommand, Debug)]
pub enum AccessPackagesCommands {
    /// List access packages
    List(ListArgs),

    /// Show one access package with its catalog
    Get(GetArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Access package ID
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AccessPackagesArgs) -> CliResult<()> {
    let client = graph_client()?;
    match args.command {
        AccessPackagesCommands::List(list) => execute_list(&client, list).await,
        AccessPackagesCommands::Get(get) => execute_get(&client, get).await,
    }
}

async fn execute_list(client: &GraphServiceClient, args: ListArgs) -> CliResult<()> {
    let builder = client
        .identity_governance()
        .entitlement_management()
        .access_packages();
    let packages = fetch_list(&builder, &args).await?;

    if args.json {
        return print_json(&packages);
    }

    if packages.is_empty() {
        println!("No access packages found.");
        return Ok(());
    }

    print_table(&packages);
    println!();
    println!("{} access package(s)", packages.len());
    Ok(())
}

async fn execute_get(client: &GraphServiceClient, args: GetArgs) -> CliResult<()> {
    let config = RequestConfiguration::new()
        .with_query(ItemQueryParameters::new().expand(["catalog"]));
    let package = client
        .identity_governance()
        .entitlement_management()
        .access_packages()
        .by_id(args.id.as_str())
        .get(Some(&config))
        .await?
        .ok_or_else(|| CliError::NotFound(format!("access package {}", args.id)))?;

    if args.json {
        return print_json(&package);
    }

    print_details(&package);
    Ok(())
}

fn print_table(packages: &[AccessPackage]) {
    println!("{:<38} {:<32} {:<8} {:<16}", "ID", "NAME", "HIDDEN", "MODIFIED");
    println!("{}", "-".repeat(96));

    for package in packages {
        println!(
            "{:<38} {:<32} {:<8} {:<16}",
            or_dash(package.entity.id.as_deref()),
            truncate(or_dash(package.display_name.as_deref()), 32),
            package.is_hidden.unwrap_or(false),
            format_time(package.modified_date_time.as_ref()),
        );
    }
}

fn print_details(package: &AccessPackage) {
    print_section(&format!(
        "Access package: {}",
        or_dash(package.display_name.as_deref())
    ));
    print_key_value("ID", or_dash(package.entity.id.as_deref()));
    print_key_value("Description", or_dash(package.description.as_deref()));
    print_key_value("Hidden", &package.is_hidden.unwrap_or(false).to_string());
    print_key_value(
        "Catalog",
        or_dash(
            package
                .catalog
                .as_ref()
                .and_then(|c| c.display_name.as_deref()),
        ),
    );
    print_key_value("Created", &format_time(package.created_date_time.as_ref()));
    print_key_value("Modified", &format_time(package.modified_date_time.as_ref()));
}
