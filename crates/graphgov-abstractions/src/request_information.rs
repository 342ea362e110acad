//! Transport-agnostic description of an HTTP request.

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::Serialize;
use url::Url;

use crate::error::{GraphError, GraphResult};
use crate::headers::RequestHeaders;
use crate::method::HttpMethod;
use crate::options::{RequestOption, RequestOptions};
use crate::query::{QueryParameters, QueryValue};
use crate::url_template;

/// Path parameter holding a pre-built URL; bypasses template expansion.
pub const RAW_URL_KEY: &str = "request-raw-url";

/// Path parameter the adapter fills with its base URL.
pub const BASE_URL_KEY: &str = "baseurl";

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const OCTET_STREAM: &str = "application/octet-stream";

/// Headers, options and query parameters a caller can attach to one request.
#[derive(Debug, Clone)]
pub struct RequestConfiguration<Q> {
    pub headers: RequestHeaders,
    pub options: RequestOptions,
    pub query_parameters: Option<Q>,
}

impl<Q> Default for RequestConfiguration<Q> {
    fn default() -> Self {
        Self {
            headers: RequestHeaders::default(),
            options: RequestOptions::default(),
            query_parameters: None,
        }
    }
}

impl<Q> RequestConfiguration<Q> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query_parameters: Q) -> Self {
        self.query_parameters = Some(query_parameters);
        self
    }

    #[must_use]
    pub fn with_header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.headers.add(key, value);
        self
    }

    #[must_use]
    pub fn with_option(mut self, option: impl RequestOption) -> Self {
        self.options.add(option);
        self
    }
}

/// Everything an adapter needs to send one request.
#[derive(Debug, Clone, Default)]
pub struct RequestInformation {
    pub method: HttpMethod,
    pub url_template: String,
    pub path_parameters: BTreeMap<String, String>,
    pub query_parameters: BTreeMap<String, QueryValue>,
    pub headers: RequestHeaders,
    pub content: Option<Bytes>,
    options: RequestOptions,
}

impl RequestInformation {
    #[must_use]
    pub fn new(
        method: HttpMethod,
        url_template: impl Into<String>,
        path_parameters: BTreeMap<String, String>,
    ) -> Self {
        Self {
            method,
            url_template: url_template.into(),
            path_parameters,
            ..Self::default()
        }
    }

    /// Builds the request URL.
    ///
    /// A `request-raw-url` path parameter is used verbatim; otherwise the
    /// template is expanded with the path and query parameters.
    pub fn uri(&self) -> GraphResult<Url> {
        if let Some(raw) = self.path_parameters.get(RAW_URL_KEY) {
            return Ok(Url::parse(raw)?);
        }
        if self.url_template.is_empty() {
            return Err(GraphError::UrlTemplate("url template cannot be empty".to_string()));
        }
        if self.url_template.contains("{+baseurl}") && !self.path_parameters.contains_key(BASE_URL_KEY) {
            return Err(GraphError::UrlTemplate(
                "pathParameters must contain a value for \"baseurl\" for the url to be built"
                    .to_string(),
            ));
        }

        let mut variables: BTreeMap<String, QueryValue> = self
            .path_parameters
            .iter()
            .map(|(key, value)| (key.clone(), QueryValue::String(value.clone())))
            .collect();
        for (key, value) in &self.query_parameters {
            variables.insert(key.clone(), value.clone());
        }

        let expanded = url_template::expand(&self.url_template, &variables)?;
        Ok(Url::parse(&expanded)?)
    }

    /// Pins the request to an absolute URL, dropping template parameters.
    pub fn set_uri(&mut self, url: &Url) {
        self.path_parameters.clear();
        self.query_parameters.clear();
        self.path_parameters
            .insert(RAW_URL_KEY.to_string(), url.to_string());
    }

    pub fn add_query_parameters(&mut self, parameters: &impl QueryParameters) {
        for (name, value) in parameters.to_query_pairs() {
            self.query_parameters.insert(name.to_string(), value);
        }
    }

    pub fn add_request_options(&mut self, options: &RequestOptions) {
        self.options.add_all(options);
    }

    pub fn add_request_option(&mut self, option: impl RequestOption) {
        self.options.add(option);
    }

    #[must_use]
    pub fn request_option<T: RequestOption>(&self) -> Option<&T> {
        self.options.get::<T>()
    }

    #[must_use]
    pub fn request_options(&self) -> &RequestOptions {
        &self.options
    }

    /// Serializes `body` as JSON and sets the `Content-Type` header.
    pub fn set_content_from_parsable<T: Serialize + ?Sized>(
        &mut self,
        content_type: &str,
        body: &T,
    ) -> GraphResult<()> {
        let bytes = serde_json::to_vec(body)?;
        self.set_content(content_type, Bytes::from(bytes));
        Ok(())
    }

    /// Sets a scalar body such as a string or number.
    pub fn set_content_from_scalar(&mut self, content_type: &str, value: impl ToString) {
        self.set_content(content_type, Bytes::from(value.to_string()));
    }

    /// Sets a binary body with `application/octet-stream`.
    pub fn set_stream_content(&mut self, content: impl Into<Bytes>) {
        self.set_content(OCTET_STREAM, content.into());
    }

    fn set_content(&mut self, content_type: &str, content: Bytes) {
        self.headers.set(CONTENT_TYPE_HEADER, content_type);
        self.content = Some(content);
    }

    /// Applies caller configuration: headers, options, then query parameters.
    pub fn configure<Q: QueryParameters>(&mut self, config: Option<&RequestConfiguration<Q>>) {
        let Some(config) = config else {
            return;
        };
        self.headers.add_all(&config.headers);
        self.add_request_options(&config.options);
        if let Some(query) = &config.query_parameters {
            self.add_query_parameters(query);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RetryHandlerOption;
    use crate::query::CollectionQueryParameters;

    const TEMPLATE: &str = "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";

    fn base_parameters() -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert(
            BASE_URL_KEY.to_string(),
            "https://graph.microsoft.com/v1.0".to_string(),
        );
        params
    }

    #[test]
    fn test_uri_expands_template() {
        let mut info = RequestInformation::new(HttpMethod::Get, TEMPLATE, base_parameters());
        info.add_query_parameters(&CollectionQueryParameters::new().top(10).count(true));

        assert_eq!(
            info.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/lifecycleWorkflows/workflows?%24count=true&%24top=10"
        );
    }

    #[test]
    fn test_uri_requires_base_url() {
        let info = RequestInformation::new(HttpMethod::Get, TEMPLATE, BTreeMap::new());
        assert!(matches!(info.uri(), Err(GraphError::UrlTemplate(_))));
    }

    #[test]
    fn test_raw_url_bypasses_template() {
        let mut params = BTreeMap::new();
        params.insert(
            RAW_URL_KEY.to_string(),
            "https://graph.microsoft.com/v1.0/identityGovernance/lifecycleWorkflows/workflows?$skiptoken=abc".to_string(),
        );
        let mut info = RequestInformation::new(HttpMethod::Get, TEMPLATE, params);
        info.add_query_parameters(&CollectionQueryParameters::new().top(10));

        assert_eq!(
            info.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/lifecycleWorkflows/workflows?$skiptoken=abc"
        );
    }

    #[test]
    fn test_set_uri_replaces_parameters() {
        let mut info = RequestInformation::new(HttpMethod::Get, TEMPLATE, base_parameters());
        let url = Url::parse("https://example.com/next?page=2").unwrap();
        info.set_uri(&url);

        assert_eq!(info.path_parameters.len(), 1);
        assert_eq!(info.uri().unwrap(), url);
    }

    #[test]
    fn test_set_content_from_parsable_sets_content_type() {
        let mut info = RequestInformation::new(HttpMethod::Post, TEMPLATE, base_parameters());
        info.headers.add("content-type", "text/plain");
        info.set_content_from_parsable("application/json", &serde_json::json!({"displayName": "x"}))
            .unwrap();

        assert_eq!(
            info.headers.get("Content-Type").unwrap(),
            &["application/json".to_string()]
        );
        assert_eq!(
            info.content.as_deref(),
            Some(br#"{"displayName":"x"}"#.as_slice())
        );
    }

    #[test]
    fn test_stream_and_scalar_content() {
        let mut info = RequestInformation::default();
        info.set_stream_content(vec![1u8, 2, 3]);
        assert_eq!(info.headers.first("content-type"), Some("application/octet-stream"));

        info.set_content_from_scalar("text/plain", 42);
        assert_eq!(info.content.as_deref(), Some(b"42".as_slice()));
        assert_eq!(info.headers.first("content-type"), Some("text/plain"));
    }

    #[test]
    fn test_configure_applies_everything() {
        let config = RequestConfiguration::new()
            .with_header("ConsistencyLevel", "eventual")
            .with_option(RetryHandlerOption::disabled())
            .with_query(CollectionQueryParameters::new().filter("category eq 'joiner'"));

        let mut info = RequestInformation::new(HttpMethod::Get, TEMPLATE, base_parameters());
        info.configure(Some(&config));

        assert_eq!(info.headers.first("consistencylevel"), Some("eventual"));
        assert!(!info.request_option::<RetryHandlerOption>().unwrap().enabled);
        assert_eq!(
            info.query_parameters.get("%24filter"),
            Some(&QueryValue::String("category eq 'joiner'".to_string()))
        );

        info.configure::<CollectionQueryParameters>(None);
        assert_eq!(info.query_parameters.len(), 1);
    }
}
