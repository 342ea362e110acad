use std::sync::Arc;

use graphgov_abstractions::RequestAdapter;
use tracing::debug;

use crate::builders::{ItemRequestBuilder, ResourcePath};
use crate::identity_governance::IdentityGovernanceRequestBuilder;

/// Service root used when the adapter has no base URL yet.
pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Entry point of the request builder tree.
///
/// Cloning is cheap; every clone shares the same adapter.
#[derive(Debug, Clone)]
pub struct GraphServiceClient {
    adapter: Arc<dyn RequestAdapter>,
}

impl GraphServiceClient {
    /// Wraps `adapter`, defaulting its base URL to [`DEFAULT_BASE_URL`].
    pub fn new(adapter: Arc<dyn RequestAdapter>) -> Self {
        if adapter.base_url().is_empty() {
            debug!(base_url = DEFAULT_BASE_URL, "Adapter has no base URL, using default");
            adapter.set_base_url(DEFAULT_BASE_URL);
        }
        Self { adapter }
    }

    #[must_use]
    pub fn request_adapter(&self) -> &Arc<dyn RequestAdapter> {
        &self.adapter
    }

    /// `/identityGovernance`.
    #[must_use]
    pub fn identity_governance(&self) -> IdentityGovernanceRequestBuilder {
        IdentityGovernanceRequestBuilder::new(
            ResourcePath::root(Arc::clone(&self.adapter)).join("identityGovernance"),
        )
    }

    /// Builder for an absolute URL handed out by the service, such as an
    /// `@odata.nextLink` or a `Location` header.
    #[must_use]
    pub fn with_url<M>(&self, raw_url: impl Into<String>) -> ItemRequestBuilder<M> {
        ItemRequestBuilder::new(ResourcePath::raw(
            Arc::clone(&self.adapter),
            "{+baseurl}",
            raw_url,
        ))
    }
}
