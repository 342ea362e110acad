//! Error types returned by request builders and adapters.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::headers::ResponseHeaders;

/// Result type alias using `GraphError`.
pub type GraphResult<T> = Result<T, GraphError>;

/// Generic API failure raised when a response cannot be mapped to a typed error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub response_status_code: u16,
    pub response_headers: ResponseHeaders,
}

impl ApiError {
    #[must_use]
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            response_status_code: status,
            response_headers: ResponseHeaders::default(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "error status code received from the API: {}", self.response_status_code)
        } else {
            f.write_str(&self.message)
        }
    }
}

/// Graph error payload: `{"error": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ODataError {
    pub error: MainError,
    /// HTTP status of the response this error was read from.
    #[serde(skip)]
    pub response_status_code: u16,
    #[serde(skip)]
    pub response_headers: ResponseHeaders,
}

impl fmt::Display for ODataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error.code, self.error.message)?;
        if let Some(request_id) = self
            .error
            .inner_error
            .as_ref()
            .and_then(|inner| inner.request_id.as_deref())
        {
            write!(f, " (request-id: {request_id})")?;
        }
        Ok(())
    }
}

/// Body of an OData error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<InnerError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Diagnostic information Graph attaches to errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InnerError {
    #[serde(rename = "request-id", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(
        rename = "client-request-id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    /// Any other properties sent by the service.
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, serde_json::Value>,
}

/// Errors that can occur when building or sending a Graph request.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Non-success response without a typed error mapping.
    #[error("{0}")]
    Api(ApiError),

    /// Non-success response carrying an OData error payload.
    #[error("Graph API error ({}): {0}", .0.response_status_code)]
    OData(Box<ODataError>),

    /// Network or transport failure.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON (de)serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed URL template or missing template variable.
    #[error("URL template error: {0}")]
    UrlTemplate(String),

    /// Expanded URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Token acquisition or authentication failure.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The builder produced no request information.
    #[error("Request information cannot be empty")]
    MissingRequestInformation,

    /// Response content type the adapter cannot parse.
    #[error("Unexpected content type: {0}")]
    UnexpectedContentType(String),

    /// A text response could not be parsed into the requested primitive.
    #[error("Invalid primitive response: {0}")]
    InvalidPrimitive(String),

    /// Client configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Circuit breaker is open, requests are being rejected.
    #[error("Circuit breaker open, failing fast")]
    CircuitOpen,
}

impl GraphError {
    /// Wraps any transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }

    /// Returns the HTTP status code of the failed response, when known.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.response_status_code),
            Self::OData(err) => Some(err.response_status_code),
            _ => None,
        }
    }

    /// Returns the OData error code (`Request_ResourceNotFound`, ...), if any.
    #[must_use]
    pub fn odata_code(&self) -> Option<&str> {
        match self {
            Self::OData(err) => Some(err.error.code.as_str()),
            _ => None,
        }
    }

    /// Returns the headers of the failed response, when known.
    #[must_use]
    pub fn response_headers(&self) -> Option<&ResponseHeaders> {
        match self {
            Self::Api(err) => Some(&err.response_headers),
            Self::OData(err) => Some(&err.response_headers),
            _ => None,
        }
    }

    /// Attaches response status and headers to a mapped error.
    #[must_use]
    pub fn with_response(mut self, status: u16, headers: &ResponseHeaders) -> Self {
        match &mut self {
            Self::Api(err) => {
                err.response_status_code = status;
                err.response_headers = headers.clone();
            }
            Self::OData(err) => {
                err.response_status_code = status;
                err.response_headers = headers.clone();
            }
            _ => {}
        }
        self
    }
}

impl From<ODataError> for GraphError {
    fn from(err: ODataError) -> Self {
        Self::OData(Box::new(err))
    }
}

impl From<ApiError> for GraphError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}
