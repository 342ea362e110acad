//! Typed Microsoft Graph client for the identity governance API.
//!
//! Covers `/identityGovernance`: access reviews, app consent requests,
//! entitlement management, lifecycle workflows, privileged access for groups
//! and terms of use. Requests are described with the types from
//! `graphgov-abstractions` and sent through any
//! [`RequestAdapter`](graphgov_abstractions::RequestAdapter); `graphgov-http`
//! provides the reqwest-based one.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use graphgov::{CollectionQueryParameters, GraphServiceClient, RequestConfiguration};
//! use graphgov_http::{GraphClientConfig, ReqwestRequestAdapter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GraphClientConfig::from_env()?;
//! let client = GraphServiceClient::new(Arc::new(ReqwestRequestAdapter::from_config(&config)?));
//!
//! let query = RequestConfiguration::new()
//!     .with_query(CollectionQueryParameters::new().filter("category eq 'joiner'"));
//! let workflows = client
//!     .identity_governance()
//!     .lifecycle_workflows()
//!     .workflows()
//!     .get(Some(&query))
//!     .await?;
//!
//! for workflow in workflows.map(|page| page.value).unwrap_or_default() {
//!     println!("{:?}", workflow.display_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builders;
pub mod identity_governance;
pub mod models;

mod client;

pub use client::{GraphServiceClient, DEFAULT_BASE_URL};

// Re-exports
pub use graphgov_abstractions::{
    CollectionQueryParameters, CollectionResponse, CountQueryParameters, GraphError, GraphResult,
    ItemQueryParameters, ODataError, PageIterator, RequestAdapter, RequestConfiguration,
};
