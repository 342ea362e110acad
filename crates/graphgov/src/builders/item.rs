use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use graphgov_abstractions::{
    BaseRequestBuilder, ErrorMappings, GraphResult, HttpMethod, ItemQueryParameters,
    RequestAdapterExt, RequestConfiguration, RequestInformation, JSON_CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{json_request, ResourcePath, ITEM_QUERY};

/// Builds and executes requests against one entity: a collection member or
/// a singleton such as `/identityGovernance`.
pub struct ItemRequestBuilder<M> {
    path: ResourcePath,
    base: BaseRequestBuilder,
    _model: PhantomData<fn() -> M>,
}

/// Singletons use the same shape as collection members.
pub type SingletonRequestBuilder<M> = ItemRequestBuilder<M>;

impl<M> Clone for ItemRequestBuilder<M> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            base: self.base.clone(),
            _model: PhantomData,
        }
    }
}

impl<M> fmt::Debug for ItemRequestBuilder<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRequestBuilder")
            .field("url_template", &self.base.url_template())
            .field("path_parameters", self.base.path_parameters())
            .finish()
    }
}

impl<M> ItemRequestBuilder<M> {
    #[must_use]
    pub fn new(path: ResourcePath) -> Self {
        let base = path.base(ITEM_QUERY);
        Self {
            path,
            base,
            _model: PhantomData,
        }
    }

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

    #[must_use]
    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> RequestInformation {
        json_request(&self.base, HttpMethod::Get, config)
    }

    #[must_use]
    pub fn to_delete_request_information(
        &self,
        config: Option<&RequestConfiguration<()>>,
    ) -> RequestInformation {
        json_request(&self.base, HttpMethod::Delete, config)
    }

    /// Deletes the entity.
    pub async fn delete(&self, config: Option<&RequestConfiguration<()>>) -> GraphResult<()> {
        let request = self.to_delete_request_information(config);
        self.base
            .request_adapter()
            .send_no_content(request, &ErrorMappings::odata())
            .await
    }
}

impl<M> ItemRequestBuilder<M>
where
    M: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub fn to_patch_request_information(
        &self,
        body: &M,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<RequestInformation> {
        let mut request = json_request(&self.base, HttpMethod::Patch, config);
        request.set_content_from_parsable(JSON_CONTENT_TYPE, body)?;
        Ok(request)
    }

    pub fn to_put_request_information(
        &self,
        body: &M,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<RequestInformation> {
        let mut request = json_request(&self.base, HttpMethod::Put, config);
        request.set_content_from_parsable(JSON_CONTENT_TYPE, body)?;
        Ok(request)
    }

    pub async fn get(
        &self,
        config: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> GraphResult<Option<M>> {
        let request = self.to_get_request_information(config);
        self.base
            .request_adapter()
            .send::<M>(request, &ErrorMappings::odata())
            .await
    }

    /// Updates the entity. Graph usually answers `204`, giving `None`.
    pub async fn patch(
        &self,
        body: &M,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<Option<M>> {
        let request = self.to_patch_request_information(body, config)?;
        self.base
            .request_adapter()
            .send::<M>(request, &ErrorMappings::odata())
            .await
    }

    /// Replaces the entity; only some resources, such as workflow tasks,
    /// accept it.
    pub async fn put(
        &self,
        body: &M,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<Option<M>> {
        let request = self.to_put_request_information(body, config)?;
        self.base
            .request_adapter()
            .send::<M>(request, &ErrorMappings::odata())
            .await
    }
}

/// A single-valued navigation property such as an assignment's
/// `accessPackage`. Read-only apart from `delete`, which only some
/// properties accept.
pub struct NavigationRequestBuilder<M> {
    path: ResourcePath,
    base: BaseRequestBuilder,
    _model: PhantomData<fn() -> M>,
}

impl<M> Clone for NavigationRequestBuilder<M> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            base: self.base.clone(),
            _model: PhantomData,
        }
    }
}

impl<M> fmt::Debug for NavigationRequestBuilder<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationRequestBuilder")
            .field("url_template", &self.base.url_template())
            .field("path_parameters", self.base.path_parameters())
            .finish()
    }
}

impl<M> NavigationRequestBuilder<M> {
    #[must_use]
    pub fn new(path: ResourcePath) -> Self {
        let base = path.base(ITEM_QUERY);
        Self {
            path,
            base,
            _model: PhantomData,
        }
    }

    #[must_use]
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    #[must_use]
    pub fn url_template(&self) -> &str {
        self.base.url_template()
    }

    #[must_use]
    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> RequestInformation {
        json_request(&self.base, HttpMethod::Get, config)
    }

    #[must_use]
    pub fn to_delete_request_information(
        &self,
        config: Option<&RequestConfiguration<()>>,
    ) -> RequestInformation {
        json_request(&self.base, HttpMethod::Delete, config)
    }

    pub async fn delete(&self, config: Option<&RequestConfiguration<()>>) -> GraphResult<()> {
        let request = self.to_delete_request_information(config);
        self.base
            .request_adapter()
            .send_no_content(request, &ErrorMappings::odata())
            .await
    }
}

impl<M> NavigationRequestBuilder<M>
where
    M: DeserializeOwned + Send + 'static,
{
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> GraphResult<Option<M>> {
        let request = self.to_get_request_information(config);
        self.base
            .request_adapter()
            .send::<M>(request, &ErrorMappings::odata())
            .await
    }
}
