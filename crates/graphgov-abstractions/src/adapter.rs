//! The request adapter contract and typed send helpers.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::{GraphError, GraphResult};
use crate::error_mapping::ErrorMappings;
use crate::headers::ResponseHeaders;
use crate::request_information::RequestInformation;

/// A successful response as received by the adapter.
#[derive(Debug, Clone, Default)]
pub struct NativeResponse {
    pub status: u16,
    pub headers: ResponseHeaders,
    pub body: Bytes,
}

impl NativeResponse {
    /// Media type of the body without parameters, lower-cased.
    #[must_use]
    pub fn content_type(&self) -> Option<String> {
        self.headers.first("content-type").map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        })
    }

    fn ensure_json(&self) -> GraphResult<()> {
        match self.content_type() {
            None => Ok(()),
            Some(media) if media.ends_with("json") => Ok(()),
            Some(media) => Err(GraphError::UnexpectedContentType(media)),
        }
    }

    fn text(&self) -> GraphResult<String> {
        match self.content_type() {
            Some(media) if media.ends_with("json") => {
                let value: serde_json::Value = serde_json::from_slice(&self.body)?;
                Ok(match value {
                    serde_json::Value::String(text) => text,
                    other => other.to_string(),
                })
            }
            None => Ok(String::from_utf8_lossy(&self.body).trim().to_string()),
            Some(media) if media.starts_with("text/") => {
                Ok(String::from_utf8_lossy(&self.body).trim().to_string())
            }
            Some(media) => Err(GraphError::UnexpectedContentType(media)),
        }
    }
}

/// Transport abstraction the request builders delegate to.
///
/// Implementations authenticate the request, send it, map failed responses
/// through `error_mappings` and return `None` for `204` or empty bodies.
#[async_trait]
pub trait RequestAdapter: Send + Sync + fmt::Debug {
    /// Base URL substituted for `{+baseurl}`.
    fn base_url(&self) -> String;

    fn set_base_url(&self, base_url: &str);

    async fn execute(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> GraphResult<Option<NativeResponse>>;
}

/// Typed send operations available on every [`RequestAdapter`].
#[async_trait]
pub trait RequestAdapterExt: RequestAdapter {
    /// Sends the request and deserializes a JSON object.
    async fn send<T>(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> GraphResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        let Some(response) = self.execute(request, error_mappings).await? else {
            return Ok(None);
        };
        response.ensure_json()?;
        Ok(Some(serde_json::from_slice(&response.body)?))
    }

    /// Sends the request and deserializes a bare JSON array.
    async fn send_collection<T>(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> GraphResult<Option<Vec<T>>>
    where
        T: DeserializeOwned + Send,
    {
        self.send::<Vec<T>>(request, error_mappings).await
    }

    /// Sends the request and parses a scalar from a text or JSON body.
    async fn send_primitive<T>(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> GraphResult<Option<T>>
    where
        T: FromStr + Send,
        T::Err: fmt::Display,
    {
        let Some(response) = self.execute(request, error_mappings).await? else {
            return Ok(None);
        };
        let text = response.text()?;
        text.parse::<T>()
            .map(Some)
            .map_err(|e| GraphError::InvalidPrimitive(format!("{text:?}: {e}")))
    }

    /// Sends the request and parses an enumeration member.
    async fn send_enum<E>(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> GraphResult<Option<E>>
    where
        E: DeserializeOwned + Send,
    {
        let Some(response) = self.execute(request, error_mappings).await? else {
            return Ok(None);
        };
        let text = response.text()?;
        Ok(Some(serde_json::from_value(serde_json::Value::String(text))?))
    }

    /// Sends the request and returns the raw body.
    async fn send_bytes(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> GraphResult<Option<Bytes>> {
        Ok(self
            .execute(request, error_mappings)
            .await?
            .map(|response| response.body))
    }

    /// Sends the request, discarding any body.
    async fn send_no_content(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> GraphResult<()> {
        self.execute(request, error_mappings).await?;
        Ok(())
    }
}

impl<A: RequestAdapter + ?Sized> RequestAdapterExt for A {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use serde::Deserialize;

    /// Returns a canned response for every request.
    #[derive(Debug)]
    struct CannedAdapter {
        response: Option<NativeResponse>,
        base_url: Mutex<String>,
    }

    impl CannedAdapter {
        fn new(content_type: Option<&str>, body: &'static [u8]) -> Self {
            let mut headers = ResponseHeaders::new();
            if let Some(content_type) = content_type {
                headers.add("Content-Type", content_type);
            }
            Self {
                response: Some(NativeResponse {
                    status: 200,
                    headers,
                    body: Bytes::from_static(body),
                }),
                base_url: Mutex::new(String::new()),
            }
        }

        fn empty() -> Self {
            Self {
                response: None,
                base_url: Mutex::new(String::new()),
            }
        }
    }

    #[async_trait]
    impl RequestAdapter for CannedAdapter {
        fn base_url(&self) -> String {
            self.base_url.lock().unwrap().clone()
        }

        fn set_base_url(&self, base_url: &str) {
            *self.base_url.lock().unwrap() = base_url.to_string();
        }

        async fn execute(
            &self,
            _request: RequestInformation,
            _error_mappings: &ErrorMappings,
        ) -> GraphResult<Option<NativeResponse>> {
            Ok(self.response.clone())
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Named {
        display_name: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    enum Category {
        Joiner,
        Leaver,
    }

    #[tokio::test]
    async fn test_send_json_object() {
        let adapter = CannedAdapter::new(
            Some("application/json; odata.metadata=minimal"),
            br#"{"displayName":"Sales"}"#,
        );
        let named: Option<Named> = adapter
            .send(RequestInformation::default(), &ErrorMappings::odata())
            .await
            .unwrap();
        assert_eq!(named.unwrap().display_name, "Sales");
    }

    #[tokio::test]
    async fn test_send_rejects_unexpected_content_type() {
        let adapter = CannedAdapter::new(Some("application/xml"), b"<x/>");
        let result = adapter
            .send::<Named>(RequestInformation::default(), &ErrorMappings::odata())
            .await;
        assert!(matches!(result, Err(GraphError::UnexpectedContentType(m)) if m == "application/xml"));
    }

    #[tokio::test]
    async fn test_send_returns_none_without_response() {
        let adapter = CannedAdapter::empty();
        let result = adapter
            .send::<Named>(RequestInformation::default(), &ErrorMappings::odata())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_send_primitive_from_text() {
        let adapter = CannedAdapter::new(Some("text/plain"), b"42\n");
        let count: Option<i32> = adapter
            .send_primitive(RequestInformation::default(), &ErrorMappings::odata())
            .await
            .unwrap();
        assert_eq!(count, Some(42));

        let bad = CannedAdapter::new(Some("text/plain"), b"many");
        let result = bad
            .send_primitive::<i32>(RequestInformation::default(), &ErrorMappings::odata())
            .await;
        assert!(matches!(result, Err(GraphError::InvalidPrimitive(_))));
    }

    #[tokio::test]
    async fn test_send_enum_and_collection() {
        let adapter = CannedAdapter::new(Some("application/json"), br#""leaver""#);
        let category: Option<Category> = adapter
            .send_enum(RequestInformation::default(), &ErrorMappings::odata())
            .await
            .unwrap();
        assert_eq!(category, Some(Category::Leaver));

        let adapter = CannedAdapter::new(None, br#"[{"displayName":"a"},{"displayName":"b"}]"#);
        let items: Option<Vec<Named>> = adapter
            .send_collection(RequestInformation::default(), &ErrorMappings::odata())
            .await
            .unwrap();
        assert_eq!(items.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let adapter: Arc<dyn RequestAdapter> =
            Arc::new(CannedAdapter::new(Some("application/octet-stream"), b"\x00\x01"));
        adapter.set_base_url("https://graph.microsoft.com/beta");
        assert_eq!(adapter.base_url(), "https://graph.microsoft.com/beta");

        let bytes = adapter
            .send_bytes(RequestInformation::default(), &ErrorMappings::odata())
            .await
            .unwrap();
        assert_eq!(bytes.unwrap().as_ref(), b"\x00\x01");
        adapter
            .send_no_content(RequestInformation::default(), &ErrorMappings::odata())
            .await
            .unwrap();
    }
}
