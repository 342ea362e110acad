//! State shared by every request builder.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::adapter::RequestAdapter;
use crate::method::HttpMethod;
use crate::request_information::{RequestInformation, RAW_URL_KEY};

/// Adapter, URL template and path parameters of one request builder.
#[derive(Debug, Clone)]
pub struct BaseRequestBuilder {
    request_adapter: Arc<dyn RequestAdapter>,
    url_template: String,
    path_parameters: BTreeMap<String, String>,
}

impl BaseRequestBuilder {
    pub fn new(
        request_adapter: Arc<dyn RequestAdapter>,
        url_template: impl Into<String>,
        path_parameters: BTreeMap<String, String>,
    ) -> Self {
        Self {
            request_adapter,
            url_template: url_template.into(),
            path_parameters,
        }
    }

    /// Builder whose requests go to `raw_url` as-is.
    pub fn with_raw_url(
        request_adapter: Arc<dyn RequestAdapter>,
        url_template: impl Into<String>,
        raw_url: impl Into<String>,
    ) -> Self {
        let mut path_parameters = BTreeMap::new();
        path_parameters.insert(RAW_URL_KEY.to_string(), raw_url.into());
        Self::new(request_adapter, url_template, path_parameters)
    }

    #[must_use]
    pub fn request_adapter(&self) -> &Arc<dyn RequestAdapter> {
        &self.request_adapter
    }

    #[must_use]
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    #[must_use]
    pub fn path_parameters(&self) -> &BTreeMap<String, String> {
        &self.path_parameters
    }

    /// Path parameters for a child builder, with one extra key bound.
    #[must_use]
    pub fn child_parameters(&self, key: &str, value: impl Into<String>) -> BTreeMap<String, String> {
        let mut parameters = self.path_parameters.clone();
        parameters.insert(key.to_string(), value.into());
        parameters
    }

    /// Starts a request against this builder's template.
    #[must_use]
    pub fn request_information(&self, method: HttpMethod) -> RequestInformation {
        RequestInformation::new(method, self.url_template.clone(), self.path_parameters.clone())
    }
}
