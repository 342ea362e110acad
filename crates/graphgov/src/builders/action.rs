use std::fmt;
use std::marker::PhantomData;

use graphgov_abstractions::{
    BaseRequestBuilder, ErrorMappings, GraphResult, HttpMethod, RequestAdapterExt,
    RequestConfiguration, RequestInformation, JSON_CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{json_request, ResourcePath};

/// An OData action without parameters or return value, such as an
/// assignment request's `cancel` or a review instance's `stop`.
#[derive(Debug, Clone)]
pub struct ActionRequestBuilder {
    base: BaseRequestBuilder,
}

impl ActionRequestBuilder {
    #[must_use]
    pub fn new(path: ResourcePath) -> Self {
        Self { base: path.base("") }
    }

    #[must_use]
    pub fn url_template(&self) -> &str {
        self.base.url_template()
    }

    #[must_use]
    pub fn to_post_request_information(
        &self,
        config: Option<&RequestConfiguration<()>>,
    ) -> RequestInformation {
        json_request(&self.base, HttpMethod::Post, config)
    }

    pub async fn post(&self, config: Option<&RequestConfiguration<()>>) -> GraphResult<()> {
        let request = self.to_post_request_information(config);
        self.base
            .request_adapter()
            .send_no_content(request, &ErrorMappings::odata())
            .await
    }
}

/// An OData action taking a JSON body `B` and returning nothing.
pub struct BodyActionRequestBuilder<B> {
    base: BaseRequestBuilder,
    _body: PhantomData<fn(B)>,
}

impl<B> Clone for BodyActionRequestBuilder<B> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            _body: PhantomData,
        }
    }
}

impl<B> fmt::Debug for BodyActionRequestBuilder<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyActionRequestBuilder")
            .field("url_template", &self.base.url_template())
            .finish_non_exhaustive()
    }
}

impl<B: Serialize + Sync> BodyActionRequestBuilder<B> {
    #[must_use]
    pub fn new(path: ResourcePath) -> Self {
        Self {
            base: path.base(""),
            _body: PhantomData,
        }
    }

    #[must_use]
    pub fn url_template(&self) -> &str {
        self.base.url_template()
    }

    pub fn to_post_request_information(
        &self,
        body: &B,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<RequestInformation> {
        let mut request = json_request(&self.base, HttpMethod::Post, config);
        request.set_content_from_parsable(JSON_CONTENT_TYPE, body)?;
        Ok(request)
    }

    pub async fn post(&self, body: &B, config: Option<&RequestConfiguration<()>>) -> GraphResult<()> {
        let request = self.to_post_request_information(body, config)?;
        self.base
            .request_adapter()
            .send_no_content(request, &ErrorMappings::odata())
            .await
    }
}

/// An OData action with an optional JSON body `B` that returns `R`, such as
/// a workflow's `createNewVersion`.
pub struct ReturningActionRequestBuilder<B, R> {
    base: BaseRequestBuilder,
    _types: PhantomData<fn(B) -> R>,
}

impl<B, R> Clone for ReturningActionRequestBuilder<B, R> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            _types: PhantomData,
        }
    }
}

impl<B, R> fmt::Debug for ReturningActionRequestBuilder<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReturningActionRequestBuilder")
            .field("url_template", &self.base.url_template())
            .finish_non_exhaustive()
    }
}

impl<B, R> ReturningActionRequestBuilder<B, R>
where
    B: Serialize + Sync,
    R: DeserializeOwned + Send + 'static,
{
    #[must_use]
    pub fn new(path: ResourcePath) -> Self {
        Self {
            base: path.base(""),
            _types: PhantomData,
        }
    }

    #[must_use]
    pub fn url_template(&self) -> &str {
        self.base.url_template()
    }

    pub fn to_post_request_information(
        &self,
        body: Option<&B>,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<RequestInformation> {
        let mut request = json_request(&self.base, HttpMethod::Post, config);
        if let Some(body) = body {
            request.set_content_from_parsable(JSON_CONTENT_TYPE, body)?;
        }
        Ok(request)
    }

    pub async fn post(
        &self,
        body: Option<&B>,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<Option<R>> {
        let request = self.to_post_request_information(body, config)?;
        self.base
            .request_adapter()
            .send::<R>(request, &ErrorMappings::odata())
            .await
    }
}
