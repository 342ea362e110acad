use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use graphgov_abstractions::{
    BaseRequestBuilder, CollectionQueryParameters, CollectionResponse, ErrorMappings, GraphResult,
    HttpMethod, PageIterator, RequestAdapterExt, RequestConfiguration, RequestInformation,
    JSON_CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::{
    json_request, CountRequestBuilder, ItemRequestBuilder, ReferenceCollectionRequestBuilder,
    ResourcePath, COLLECTION_QUERY,
};
use crate::models::GraphEntity;

/// Builds and executes requests against a collection of `M`.
pub struct CollectionRequestBuilder<M> {
    path: ResourcePath,
    base: BaseRequestBuilder,
    _model: PhantomData<fn() -> M>,
}

impl<M> Clone for CollectionRequestBuilder<M> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            base: self.base.clone(),
            _model: PhantomData,
        }
    }
}

impl<M> fmt::Debug for CollectionRequestBuilder<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionRequestBuilder")
            .field("url_template", &self.base.url_template())
            .field("path_parameters", self.base.path_parameters())
            .finish()
    }
}

impl<M> CollectionRequestBuilder<M> {
    #[must_use]
    pub fn new(path: ResourcePath) -> Self {
        let base = path.base(COLLECTION_QUERY);
        Self {
            path,
            base,
            _model: PhantomData,
        }
    }

    /// Same builder, sending requests to `raw_url` instead of the template.
    #[must_use]
    pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
        Self::new(ResourcePath::raw(
            Arc::clone(self.path.adapter()),
            self.path.template(),
            raw_url,
        ))
    }

    #[must_use]
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    #[must_use]
    pub fn url_template(&self) -> &str {
        self.base.url_template()
    }

    /// The collection's `$count` segment.
    #[must_use]
    pub fn count(&self) -> CountRequestBuilder {
        CountRequestBuilder::new(self.path.join("$count"))
    }

    /// The collection's `$ref` segment. Only navigation collections that
    /// hold references (such as `incompatibleGroups`) accept it.
    #[must_use]
    pub fn reference(&self) -> ReferenceCollectionRequestBuilder {
        ReferenceCollectionRequestBuilder::new(self.path.join("$ref"))
    }

    #[must_use]
    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> RequestInformation {
        json_request(&self.base, HttpMethod::Get, config)
    }
}

impl<M: GraphEntity> CollectionRequestBuilder<M> {
    /// The item of this collection with the given key.
    #[must_use]
    pub fn by_id(&self, id: impl Into<String>) -> ItemRequestBuilder<M> {
        ItemRequestBuilder::new(self.path.join_key(M::KEY, id))
    }
}

impl<M> CollectionRequestBuilder<M>
where
    M: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub fn to_post_request_information(
        &self,
        body: &M,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<RequestInformation> {
        let mut request = json_request(&self.base, HttpMethod::Post, config);
        request.set_content_from_parsable(JSON_CONTENT_TYPE, body)?;
        Ok(request)
    }

    /// Reads one page of the collection.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> GraphResult<Option<CollectionResponse<M>>> {
        let request = self.to_get_request_information(config);
        self.base
            .request_adapter()
            .send::<CollectionResponse<M>>(request, &ErrorMappings::odata())
            .await
    }

    /// Creates a new member of the collection.
    pub async fn post(
        &self,
        body: &M,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<Option<M>> {
        let request = self.to_post_request_information(body, config)?;
        self.base
            .request_adapter()
            .send::<M>(request, &ErrorMappings::odata())
            .await
    }

    /// Reads the first page and returns an iterator over every item.
    ///
    /// Headers and options from `config` are sent with each follow-up page.
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
        debug!(
            items = first_page.value.len(),
            has_next_link = first_page.odata_next_link.is_some(),
            "Fetched first page"
        );
        Ok(PageIterator::new(
            Arc::clone(self.base.request_adapter()),
            first_page,
            ErrorMappings::odata(),
        )
        .with_headers(headers)
        .with_options(options))
    }
}
