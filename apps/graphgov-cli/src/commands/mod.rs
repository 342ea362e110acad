//! CLI command implementations

pub mod access_packages;
pub mod access_reviews;
pub mod assignment_requests;
pub mod workflows;

use std::sync::Arc;

use clap::Args;
use graphgov::builders::CollectionRequestBuilder;
use graphgov::{CollectionQueryParameters, GraphServiceClient, RequestConfiguration};
use graphgov_http::{GraphClientConfig, ReqwestRequestAdapter};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Largest page size Graph accepts for these collections.
const MAX_PAGE_SIZE: i32 = 999;

/// Build an app-only client from `GRAPHGOV_*` environment variables.
pub fn graph_client() -> CliResult<GraphServiceClient> {
    let config = GraphClientConfig::from_env()?;
    debug!(
        tenant_id = %config.tenant_id,
        cloud = %config.cloud,
        api_version = %config.api_version,
        "Loaded client configuration"
    );
    let adapter = ReqwestRequestAdapter::from_config(&config)?;
    Ok(GraphServiceClient::new(Arc::new(adapter)))
}

/// Options shared by every `list` subcommand.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// OData filter expression, e.g. "displayName eq 'Sales'"
    #[arg(long)]
    pub filter: Option<String>,

    /// Page size requested from the service
    #[arg(long, default_value = "50")]
    pub top: i32,

    /// Follow @odata.nextLink until every page is read
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn validate(&self) -> CliResult<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.top) {
            return Err(CliError::Validation(format!(
                "--top must be between 1 and {MAX_PAGE_SIZE}."
            )));
        }
        Ok(())
    }

    pub fn query(&self) -> RequestConfiguration<CollectionQueryParameters> {
        let mut query = CollectionQueryParameters::new().top(self.top);
        if let Some(filter) = &self.filter {
            query = query.filter(filter.clone());
        }
        RequestConfiguration::new().with_query(query)
    }
}

/// Read the first page, or every page with `--all`.
pub async fn fetch_list<M>(
    builder: &CollectionRequestBuilder<M>,
    args: &ListArgs,
) -> CliResult<Vec<M>>
where
    M: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    args.validate()?;
    let config = args.query();

    if !args.all {
        let page = builder.get(Some(&config)).await?;
        return Ok(page.map(|p| p.value).unwrap_or_default());
    }

    let mut items = Vec::new();
    let mut iterator = builder.page_iterator(Some(&config)).await?;
    iterator
        .iterate(|item| {
            items.push(item);
            true
        })
        .await?;
    debug!(count = items.len(), "Read all pages");
    Ok(items)
}
