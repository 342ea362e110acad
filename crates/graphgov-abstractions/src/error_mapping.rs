//! Selection of typed error decoders by response status.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{ApiError, GraphError, ODataError};
use crate::headers::ResponseHeaders;

/// Decodes a failed response body into a typed error.
pub type ErrorFactory = fn(&[u8]) -> Result<GraphError, serde_json::Error>;

/// Decodes the standard Graph `{"error": {...}}` payload.
pub fn odata_error_factory(body: &[u8]) -> Result<GraphError, serde_json::Error> {
    let err: ODataError = serde_json::from_slice(body)?;
    Ok(GraphError::from(err))
}

/// Table from status pattern (`"404"`, `"4XX"`, `"5XX"`, `"XXX"`) to decoder.
#[derive(Clone, Default)]
pub struct ErrorMappings {
    factories: HashMap<String, ErrorFactory>,
}

impl fmt::Debug for ErrorMappings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.factories.keys().collect();
        keys.sort();
        f.debug_struct("ErrorMappings").field("patterns", &keys).finish()
    }
}

impl ErrorMappings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The mapping used by every Graph request builder: any 4XX/5XX as `ODataError`.
    #[must_use]
    pub fn odata() -> Self {
        Self::new().with("XXX", odata_error_factory)
    }

    /// Adds or replaces the decoder for a status pattern.
    #[must_use]
    pub fn with(mut self, pattern: impl Into<String>, factory: ErrorFactory) -> Self {
        self.factories.insert(pattern.into().to_ascii_uppercase(), factory);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Picks the decoder for a status: exact code, then `4XX`/`5XX`, then `XXX`.
    #[must_use]
    pub fn factory_for(&self, status: u16) -> Option<ErrorFactory> {
        if let Some(factory) = self.factories.get(&status.to_string()) {
            return Some(*factory);
        }
        let class = match status {
            400..=499 => Some("4XX"),
            500..=599 => Some("5XX"),
            _ => None,
        };
        if let Some(factory) = class.and_then(|class| self.factories.get(class)) {
            return Some(*factory);
        }
        if (400..600).contains(&status) {
            return self.factories.get("XXX").copied();
        }
        None
    }

    /// Turns a failed response into the error returned to the caller.
    #[must_use]
    pub fn map_error(&self, status: u16, headers: &ResponseHeaders, body: &[u8]) -> GraphError {
        let Some(factory) = self.factory_for(status) else {
            return api_error(
                format!(
                    "The server returned an unexpected status code and no error factory is registered for this code: {status}"
                ),
                status,
                headers,
            );
        };

        if body.is_empty() {
            return api_error(
                format!(
                    "The server returned an unexpected status code with no response body: {status}"
                ),
                status,
                headers,
            );
        }

        match factory(body) {
            Ok(err) => err.with_response(status, headers),
            Err(decode_err) => {
                debug!(status, error = %decode_err, "Failed to decode error response body");
                api_error(
                    format!(
                        "The server returned an unexpected status code but the error could not be deserialized: {status}"
                    ),
                    status,
                    headers,
                )
            }
        }
    }
}

fn api_error(message: String, status: u16, headers: &ResponseHeaders) -> GraphError {
    let mut err = ApiError::new(message, status);
    err.response_headers = headers.clone();
    GraphError::Api(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found_factory(_body: &[u8]) -> Result<GraphError, serde_json::Error> {
        Ok(GraphError::Api(ApiError::new("exact", 0)))
    }

    fn client_factory(_body: &[u8]) -> Result<GraphError, serde_json::Error> {
        Ok(GraphError::Api(ApiError::new("client", 0)))
    }

    fn server_factory(_body: &[u8]) -> Result<GraphError, serde_json::Error> {
        Ok(GraphError::Api(ApiError::new("server", 0)))
    }

    fn message(err: GraphError) -> String {
        match err {
            GraphError::Api(api) => api.message,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn mappings() -> ErrorMappings {
        ErrorMappings::odata()
            .with("404", not_found_factory)
            .with("4xx", client_factory)
            .with("5XX", server_factory)
    }

    #[test]
    fn test_exact_status_wins() {
        let err = mappings().map_error(404, &ResponseHeaders::new(), b"{}");
        assert_eq!(message(err), "exact");
    }

    #[test]
    fn test_class_pattern_before_catch_all() {
        let headers = ResponseHeaders::new();
        assert_eq!(message(mappings().map_error(409, &headers, b"{}")), "client");
        assert_eq!(message(mappings().map_error(503, &headers, b"{}")), "server");
    }

    #[test]
    fn test_catch_all_decodes_odata() {
        let mut headers = ResponseHeaders::new();
        headers.add("request-id", "abc");
        let body = br#"{"error":{"code":"Forbidden","message":"Nope"}}"#;

        let err = ErrorMappings::odata().map_error(403, &headers, body);
        match err {
            GraphError::OData(odata) => {
                assert_eq!(odata.error.code, "Forbidden");
                assert_eq!(odata.response_status_code, 403);
                assert_eq!(odata.response_headers.first("request-id"), Some("abc"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_catch_all_ignores_non_error_status() {
        assert!(ErrorMappings::odata().factory_for(302).is_none());
        assert!(ErrorMappings::odata().factory_for(600).is_none());
        assert!(ErrorMappings::odata().factory_for(599).is_some());
    }

    #[test]
    fn test_missing_factory_message() {
        let err = ErrorMappings::new().map_error(418, &ResponseHeaders::new(), b"{}");
        assert_eq!(err.status_code(), Some(418));
        assert_eq!(
            message(err),
            "The server returned an unexpected status code and no error factory is registered for this code: 418"
        );
    }

    #[test]
    fn test_empty_body_message() {
        let err = ErrorMappings::odata().map_error(500, &ResponseHeaders::new(), b"");
        assert_eq!(
            message(err),
            "The server returned an unexpected status code with no response body: 500"
        );
    }

    #[test]
    fn test_undecodable_body_message() {
        let err = ErrorMappings::odata().map_error(502, &ResponseHeaders::new(), b"<html>");
        assert_eq!(err.status_code(), Some(502));
        assert_eq!(
            message(err),
            "The server returned an unexpected status code but the error could not be deserialized: 502"
        );
    }
}
