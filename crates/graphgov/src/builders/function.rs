use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use graphgov_abstractions::{
    BaseRequestBuilder, CollectionQueryParameters, CollectionResponse, ErrorMappings, GraphResult,
    HttpMethod, PageIterator, QueryParameters, RequestAdapterExt, RequestConfiguration,
    RequestInformation,
};
use serde::de::DeserializeOwned;

use super::{json_request, ResourcePath, FUNCTION_COLLECTION_QUERY};

/// An OData function, called with `GET` and its arguments in the path, e.g.
/// `filterByCurrentUser(on='reviewer')`. `Q` is the query parameter set the
/// function accepts.
pub struct FunctionRequestBuilder<R, Q = ()> {
    base: BaseRequestBuilder,
    _types: PhantomData<fn(Q) -> R>,
}

/// A function returning a pageable collection of `M`.
pub type CollectionFunctionRequestBuilder<M> =
    FunctionRequestBuilder<CollectionResponse<M>, CollectionQueryParameters>;

impl<R, Q> Clone for FunctionRequestBuilder<R, Q> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            _types: PhantomData,
        }
    }
}

impl<R, Q> fmt::Debug for FunctionRequestBuilder<R, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRequestBuilder")
            .field("url_template", &self.base.url_template())
            .field("path_parameters", self.base.path_parameters())
            .finish()
    }
}

impl<R> FunctionRequestBuilder<R, ()> {
    /// A function returning a single value and taking no query parameters.
    #[must_use]
    pub fn single(path: ResourcePath) -> Self {
        Self {
            base: path.base(""),
            _types: PhantomData,
        }
    }
}

impl<M> FunctionRequestBuilder<CollectionResponse<M>, CollectionQueryParameters> {
    #[must_use]
    pub fn collection(path: ResourcePath) -> Self {
        Self {
            base: path.base(FUNCTION_COLLECTION_QUERY),
            _types: PhantomData,
        }
    }
}

impl<R, Q> FunctionRequestBuilder<R, Q>
where
    R: DeserializeOwned + Send + 'static,
    Q: QueryParameters,
{
    #[must_use]
    pub fn url_template(&self) -> &str {
        self.base.url_template()
    }

    #[must_use]
    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<Q>>,
    ) -> RequestInformation {
        json_request(&self.base, HttpMethod::Get, config)
    }

    pub async fn get(&self, config: Option<&RequestConfiguration<Q>>) -> GraphResult<Option<R>> {
        let request = self.to_get_request_information(config);
        self.base
            .request_adapter()
            .send::<R>(request, &ErrorMappings::odata())
            .await
    }
}

impl<M> FunctionRequestBuilder<CollectionResponse<M>, CollectionQueryParameters>
where
    M: DeserializeOwned + Send + 'static,
{
    /// Calls the function and iterates over every page of its result.
    pub async fn page_iterator(
        &self,
        config: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> GraphResult<PageIterator<M>> {
        let request = self.to_get_request_information(config);
        let headers = request.headers.clone();
        let options = request.request_options().clone();
        let first_page = self
            .base
            .request_adapter()
            .send::<CollectionResponse<M>>(request, &ErrorMappings::odata())
            .await?
            .unwrap_or_default();
        Ok(PageIterator::new(
            Arc::clone(self.base.request_adapter()),
            first_page,
            ErrorMappings::odata(),
        )
        .with_headers(headers)
        .with_options(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support::RecordingAdapter;
    use crate::models::AccessReviewScheduleDefinition;
    use serde_json::json;

    #[tokio::test]
    async fn test_filter_by_current_user() {
        let adapter = RecordingAdapter::new();
        adapter.respond_json(json!({ "value": [{ "id": "d1", "displayName": "Quarterly" }] }));
        let function: CollectionFunctionRequestBuilder<AccessReviewScheduleDefinition> =
            FunctionRequestBuilder::collection(
                ResourcePath::root(adapter.clone())
                    .join("identityGovernance/accessReviews/definitions")
                    .join_function(
                        "filterByCurrentUser(on='{on}')",
                        &[("on", "reviewer".to_string())],
                    ),
            );
        let config = RequestConfiguration::new().with_query(CollectionQueryParameters::new().top(10));

        let page = function.get(Some(&config)).await.unwrap().unwrap();
        assert_eq!(page.value.len(), 1);

        let request = adapter.last_request();
        assert_eq!(
            request.url_template,
            "{+baseurl}/identityGovernance/accessReviews/definitions/filterByCurrentUser(on='{on}'){?%24count,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
        );
        assert_eq!(
            request.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/accessReviews/definitions/filterByCurrentUser(on='reviewer')?%24top=10"
        );
    }
}
