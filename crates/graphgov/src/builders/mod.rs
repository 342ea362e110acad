//! Generic request builders.
//!
//! Graph resources all follow a handful of shapes: a collection, an item in a
//! collection, a single-valued navigation property, a `$count` segment, an
//! action, a function and a `$ref` collection. Each shape is one generic
//! builder here, parameterised by the model it returns. Navigation between
//! resources is added as inherent methods on concrete instantiations in
//! [`crate::identity_governance`].

use std::collections::BTreeMap;
use std::sync::Arc;

use graphgov_abstractions::{
    BaseRequestBuilder, HttpMethod, QueryParameters, RequestAdapter, RequestConfiguration,
    RequestInformation, BASE_URL_KEY, JSON_CONTENT_TYPE,
};

mod action;
mod collection;
mod count;
mod function;
mod item;
mod reference;

pub use action::{ActionRequestBuilder, BodyActionRequestBuilder, ReturningActionRequestBuilder};
pub use collection::CollectionRequestBuilder;
pub use count::CountRequestBuilder;
pub use function::{CollectionFunctionRequestBuilder, FunctionRequestBuilder};
pub use item::{ItemRequestBuilder, NavigationRequestBuilder, SingletonRequestBuilder};
pub use reference::{ReferenceCollectionRequestBuilder, ReferenceCreate};

pub(crate) const ITEM_QUERY: &str = "{?%24expand,%24select}";
pub(crate) const COLLECTION_QUERY: &str =
    "{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
pub(crate) const FUNCTION_COLLECTION_QUERY: &str =
    "{?%24count,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
pub(crate) const COUNT_QUERY: &str = "{?%24filter,%24search}";

const ACCEPT_HEADER: &str = "Accept";

/// A resource path under construction: template segments plus the path
/// parameters bound so far.
#[derive(Debug, Clone)]
pub struct ResourcePath {
    adapter: Arc<dyn RequestAdapter>,
    template: String,
    parameters: BTreeMap<String, String>,
}

impl ResourcePath {
    /// The service root, `{+baseurl}`.
    pub fn root(adapter: Arc<dyn RequestAdapter>) -> Self {
        let mut parameters = BTreeMap::new();
        parameters.insert(BASE_URL_KEY.to_string(), adapter.base_url());
        Self {
            adapter,
            template: "{+baseurl}".to_string(),
            parameters,
        }
    }

    /// A path whose requests go to `raw_url` unchanged.
    pub fn raw(adapter: Arc<dyn RequestAdapter>, template: &str, raw_url: impl Into<String>) -> Self {
        let base = BaseRequestBuilder::with_raw_url(adapter, template, raw_url);
        Self {
            adapter: Arc::clone(base.request_adapter()),
            template: template.to_string(),
            parameters: base.path_parameters().clone(),
        }
    }

    /// Appends a literal segment such as `accessPackages`.
    #[must_use]
    pub fn join(&self, segment: &str) -> Self {
        Self {
            adapter: Arc::clone(&self.adapter),
            template: format!("{}/{segment}", self.template),
            parameters: self.parameters.clone(),
        }
    }

    /// Appends a key segment bound to `value`.
    ///
    /// When the path already binds `key` (a collection nested in an item of
    /// the same type) the parameter gets a numeric suffix, so
    /// `accessPackage%2Did` becomes `accessPackage%2Did1`.
    #[must_use]
    pub fn join_key(&self, key: &str, value: impl Into<String>) -> Self {
        let mut name = key.to_string();
        let mut suffix = 1;
        while self.parameters.contains_key(&name) {
            name = format!("{key}{suffix}");
            suffix += 1;
        }
        let mut parameters = self.parameters.clone();
        parameters.insert(name.clone(), value.into());
        Self {
            adapter: Arc::clone(&self.adapter),
            template: format!("{}/{{{name}}}", self.template),
            parameters,
        }
    }

    /// Appends an OData function call segment.
    ///
    /// `segment` carries the argument placeholders, e.g.
    /// `filterByCurrentUser(on='{on}')`; `arguments` binds them.
    #[must_use]
    pub fn join_function(&self, segment: &str, arguments: &[(&str, String)]) -> Self {
        let mut parameters = self.parameters.clone();
        for (name, value) in arguments {
            parameters.insert((*name).to_string(), value.clone());
        }
        Self {
            adapter: Arc::clone(&self.adapter),
            template: format!("{}/{segment}", self.template),
            parameters,
        }
    }

    #[must_use]
    pub fn adapter(&self) -> &Arc<dyn RequestAdapter> {
        &self.adapter
    }

    /// Template without any query expression.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// Base builder for this path with the given query expression.
    pub(crate) fn base(&self, query: &str) -> BaseRequestBuilder {
        BaseRequestBuilder::new(
            Arc::clone(&self.adapter),
            format!("{}{query}", self.template),
            self.parameters.clone(),
        )
    }
}

/// Starts a request, applies caller configuration, then the default `Accept`.
pub(crate) fn build_request<Q: QueryParameters>(
    base: &BaseRequestBuilder,
    method: HttpMethod,
    accept: &str,
    config: Option<&RequestConfiguration<Q>>,
) -> RequestInformation {
    let mut request = base.request_information(method);
    request.configure(config);
    request.headers.try_add(ACCEPT_HEADER, accept);
    request
}

pub(crate) fn json_request<Q: QueryParameters>(
    base: &BaseRequestBuilder,
    method: HttpMethod,
    config: Option<&RequestConfiguration<Q>>,
) -> RequestInformation {
    build_request(base, method, JSON_CONTENT_TYPE, config)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use graphgov_abstractions::{
        ErrorMappings, GraphResult, NativeResponse, RequestAdapter, RequestInformation,
        ResponseHeaders,
    };

    /// Records every request and replays queued responses.
    #[derive(Debug, Default)]
    pub struct RecordingAdapter {
        base_url: Mutex<String>,
        requests: Mutex<Vec<RequestInformation>>,
        responses: Mutex<VecDeque<Option<NativeResponse>>>,
    }

    impl RecordingAdapter {
        pub fn new() -> Arc<Self> {
            let adapter = Self::default();
            *adapter.base_url.lock().unwrap() = "https://graph.microsoft.com/v1.0".to_string();
            Arc::new(adapter)
        }

        pub fn respond_json(&self, body: serde_json::Value) {
            let mut headers = ResponseHeaders::new();
            headers.add("Content-Type", "application/json");
            self.responses.lock().unwrap().push_back(Some(NativeResponse {
                status: 200,
                headers,
                body: body.to_string().into(),
            }));
        }

        pub fn respond_text(&self, body: &str) {
            let mut headers = ResponseHeaders::new();
            headers.add("Content-Type", "text/plain");
            self.responses.lock().unwrap().push_back(Some(NativeResponse {
                status: 200,
                headers,
                body: body.to_string().into(),
            }));
        }

        pub fn last_request(&self) -> RequestInformation {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl RequestAdapter for RecordingAdapter {
        fn base_url(&self) -> String {
            self.base_url.lock().unwrap().clone()
        }

        fn set_base_url(&self, base_url: &str) {
            *self.base_url.lock().unwrap() = base_url.to_string();
        }

        async fn execute(
            &self,
            request: RequestInformation,
            _error_mappings: &ErrorMappings,
        ) -> GraphResult<Option<NativeResponse>> {
            self.requests.lock().unwrap().push(request);
            Ok(self.responses.lock().unwrap().pop_front().flatten())
        }
    }
}
