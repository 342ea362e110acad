//! Request abstractions for Microsoft Graph request builders.
//!
//! This crate holds everything a request builder needs to describe a call
//! without knowing how it is sent: the HTTP method, the URL template with its
//! path and query parameters, headers, body content and per-request options.
//! A [`RequestAdapter`] implementation (see `graphgov-http`) turns a
//! [`RequestInformation`] into an HTTP exchange and maps failed responses
//! through [`ErrorMappings`].
//!
//! # Features
//!
//! - RFC 6570 URL template expansion (simple, reserved and query forms)
//! - Case-insensitive multi-valued header maps
//! - OData query parameter sets (`$select`, `$filter`, `$top`, ...)
//! - Status-pattern error mapping (`404`, `4XX`, `5XX`, `XXX`)
//! - Bearer token authentication with CAE claims support
//! - `@odata.nextLink` page iteration
//!
//! # Example
//!
//! ```no_run
//! use std::collections::BTreeMap;
//! use graphgov_abstractions::{HttpMethod, ItemQueryParameters, RequestInformation};
//!
//! # fn example() -> Result<(), graphgov_abstractions::GraphError> {
//! let mut path_parameters = BTreeMap::new();
//! path_parameters.insert("baseurl".to_string(), "https://graph.microsoft.com/v1.0".to_string());
//! path_parameters.insert("accessPackage%2Did".to_string(), "8f1d".to_string());
//!
//! let mut info = RequestInformation::new(
//!     HttpMethod::Get,
//!     "{+baseurl}/identityGovernance/entitlementManagement/accessPackages/{accessPackage%2Did}{?%24expand,%24select}",
//!     path_parameters,
//! );
//! info.add_query_parameters(&ItemQueryParameters::new().select(["id", "displayName"]));
//!
//! assert_eq!(
//!     info.uri()?.as_str(),
//!     "https://graph.microsoft.com/v1.0/identityGovernance/entitlementManagement/accessPackages/8f1d?%24select=id,displayName"
//! );
//! # Ok(())
//! # }
//! ```

mod adapter;
mod auth;
mod base_request_builder;
mod error;
mod error_mapping;
mod headers;
mod method;
mod options;
mod page_iterator;
mod query;
mod request_information;
pub mod url_template;

// Re-exports
pub use adapter::{NativeResponse, RequestAdapter, RequestAdapterExt};
pub use auth::{
    AccessTokenProvider, AllowedHostsValidator, AnonymousAuthenticationProvider, AuthContext,
    is_loopback_url, AuthenticationProvider, BaseBearerTokenAuthenticationProvider,
    StaticTokenProvider, AUTHORIZATION_HEADER,
};
pub use base_request_builder::BaseRequestBuilder;
pub use error::{
    ApiError, ErrorDetails, GraphError, GraphResult, InnerError, MainError, ODataError,
};
pub use error_mapping::{odata_error_factory, ErrorFactory, ErrorMappings};
pub use headers::{Headers, RequestHeaders, ResponseHeaders};
pub use method::HttpMethod;
pub use options::{HeadersInspectionOption, RequestOption, RequestOptions, RetryHandlerOption};
pub use page_iterator::{CollectionResponse, PageIterator};
pub use query::{
    CollectionQueryParameters, CountQueryParameters, ItemQueryParameters, QueryParameters,
    QueryValue, ReferenceDeleteQueryParameters,
};
pub use request_information::{
    RequestConfiguration, RequestInformation, BASE_URL_KEY, RAW_URL_KEY,
};

/// Content type used for JSON request and response bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";
