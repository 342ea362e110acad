//! Iteration over paged collection responses.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapter::{RequestAdapter, RequestAdapterExt};
use crate::error::GraphResult;
use crate::error_mapping::ErrorMappings;
use crate::headers::RequestHeaders;
use crate::method::HttpMethod;
use crate::options::RequestOptions;
use crate::request_information::{RequestInformation, RAW_URL_KEY};
use crate::JSON_CONTENT_TYPE;

/// One page of a Graph collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionResponse<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "@odata.nextLink", default, skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,
    #[serde(rename = "@odata.deltaLink", default, skip_serializing_if = "Option::is_none")]
    pub odata_delta_link: Option<String>,
    #[serde(rename = "@odata.count", default, skip_serializing_if = "Option::is_none")]
    pub odata_count: Option<i64>,
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self {
            value: Vec::new(),
            odata_next_link: None,
            odata_delta_link: None,
            odata_count: None,
        }
    }
}

/// Walks `@odata.nextLink` pages, handing each item to a callback.
///
/// Follow-up requests carry the headers and options of the original request.
/// When the callback returns `false` iteration pauses; calling
/// [`PageIterator::iterate`] again resumes with the next item.
pub struct PageIterator<T> {
    adapter: Arc<dyn RequestAdapter>,
    error_mappings: ErrorMappings,
    headers: RequestHeaders,
    options: RequestOptions,
    current: VecDeque<T>,
    next_link: Option<String>,
    delta_link: Option<String>,
}

impl<T> fmt::Debug for PageIterator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageIterator")
            .field("buffered", &self.current.len())
            .field("next_link", &self.next_link)
            .field("delta_link", &self.delta_link)
            .finish_non_exhaustive()
    }
}

impl<T: DeserializeOwned + Send> PageIterator<T> {
    pub fn new(
        adapter: Arc<dyn RequestAdapter>,
        first_page: CollectionResponse<T>,
        error_mappings: ErrorMappings,
    ) -> Self {
        Self {
            adapter,
            error_mappings,
            headers: RequestHeaders::default(),
            options: RequestOptions::default(),
            current: first_page.value.into(),
            next_link: first_page.odata_next_link,
            delta_link: first_page.odata_delta_link,
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: RequestHeaders) -> Self {
        self.headers = headers;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    /// Delta link returned by the last page, for incremental queries.
    #[must_use]
    pub fn delta_link(&self) -> Option<&str> {
        self.delta_link.as_deref()
    }

    /// Fetches the page behind the current next link.
    ///
    /// Returns `None` once there is no next link. Items of the fetched page are
    /// not buffered; use [`PageIterator::iterate`] for item-level traversal.
    pub async fn next_page(&mut self) -> GraphResult<Option<CollectionResponse<T>>> {
        let Some(link) = self.next_link.take() else {
            return Ok(None);
        };
        debug!(next_link = %link, "Fetching next page");

        let mut request = RequestInformation::new(HttpMethod::Get, String::new(), Default::default());
        request.path_parameters.insert(RAW_URL_KEY.to_string(), link);
        request.headers.add_all(&self.headers);
        request.headers.try_add("Accept", JSON_CONTENT_TYPE);
        request.add_request_options(&self.options);

        let page = self
            .adapter
            .send::<CollectionResponse<T>>(request, &self.error_mappings)
            .await?;
        if let Some(page) = &page {
            self.next_link = page.odata_next_link.clone();
            if page.odata_delta_link.is_some() {
                self.delta_link = page.odata_delta_link.clone();
            }
        }
        Ok(page)
    }

    /// Calls `callback` for every item until it returns `false` or the pages
    /// run out.
    ///
    /// Returns `true` when every page was consumed and `false` when the
    /// callback paused iteration.
    pub async fn iterate<F>(&mut self, mut callback: F) -> GraphResult<bool>
    where
        F: FnMut(T) -> bool,
    {
        loop {
            while let Some(item) = self.current.pop_front() {
                if !callback(item) {
                    return Ok(false);
                }
            }
            match self.next_page().await? {
                Some(page) => self.current.extend(page.value),
                None => return Ok(true),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;

    use crate::adapter::NativeResponse;
    use crate::headers::ResponseHeaders;

    /// Serves pages from a fixed list keyed by raw URL and records requests.
    #[derive(Debug, Default)]
    struct PagedAdapter {
        pages: Vec<(&'static str, serde_json::Value)>,
        seen: Mutex<Vec<RequestInformation>>,
    }

    #[async_trait]
    impl RequestAdapter for PagedAdapter {
        fn base_url(&self) -> String {
            "https://graph.microsoft.com/v1.0".to_string()
        }

        fn set_base_url(&self, _base_url: &str) {}

        async fn execute(
            &self,
            request: RequestInformation,
            _error_mappings: &ErrorMappings,
        ) -> GraphResult<Option<NativeResponse>> {
            let url = request.uri()?.to_string();
            self.seen.lock().unwrap().push(request);
            let body = self
                .pages
                .iter()
                .find(|(link, _)| *link == url)
                .map(|(_, body)| body.to_string())
                .unwrap_or_else(|| panic!("unexpected url {url}"));
            let mut headers = ResponseHeaders::new();
            headers.add("content-type", "application/json");
            Ok(Some(NativeResponse {
                status: 200,
                headers,
                body: Bytes::from(body),
            }))
        }
    }

    fn first_page() -> CollectionResponse<String> {
        serde_json::from_value(serde_json::json!({
            "value": ["a", "b"],
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/items?$skiptoken=2"
        }))
        .unwrap()
    }

    fn adapter() -> Arc<PagedAdapter> {
        Arc::new(PagedAdapter {
            pages: vec![
                (
                    "https://graph.microsoft.com/v1.0/items?$skiptoken=2",
                    serde_json::json!({
                        "value": ["c"],
                        "@odata.nextLink": "https://graph.microsoft.com/v1.0/items?$skiptoken=3"
                    }),
                ),
                (
                    "https://graph.microsoft.com/v1.0/items?$skiptoken=3",
                    serde_json::json!({
                        "value": ["d"],
                        "@odata.deltaLink": "https://graph.microsoft.com/v1.0/items?$deltatoken=x"
                    }),
                ),
            ],
            seen: Mutex::default(),
        })
    }

    #[test]
    fn test_collection_response_shape() {
        let page: CollectionResponse<serde_json::Value> =
            serde_json::from_str(r#"{"@odata.count": 12}"#).unwrap();
        assert!(page.value.is_empty());
        assert_eq!(page.odata_count, Some(12));
    }

    #[tokio::test]
    async fn test_iterates_all_pages() {
        let adapter = adapter();
        let mut iterator = PageIterator::new(adapter.clone(), first_page(), ErrorMappings::odata())
            .with_headers({
                let mut headers = RequestHeaders::new();
                headers.add("ConsistencyLevel", "eventual");
                headers
            });

        let mut items = Vec::new();
        let completed = iterator
            .iterate(|item| {
                items.push(item);
                true
            })
            .await
            .unwrap();

        assert!(completed);
        assert_eq!(items, vec!["a", "b", "c", "d"]);
        assert_eq!(
            iterator.delta_link(),
            Some("https://graph.microsoft.com/v1.0/items?$deltatoken=x")
        );
        assert!(iterator.next_link().is_none());

        let seen = adapter.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].headers.first("consistencylevel"), Some("eventual"));
        assert_eq!(seen[0].headers.first("accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_pause_and_resume() {
        let mut iterator = PageIterator::new(adapter(), first_page(), ErrorMappings::odata());

        let mut items = Vec::new();
        let completed = iterator
            .iterate(|item| {
                let keep_going = item != "b";
                items.push(item);
                keep_going
            })
            .await
            .unwrap();
        assert!(!completed);
        assert_eq!(items, vec!["a", "b"]);

        let completed = iterator
            .iterate(|item| {
                items.push(item);
                true
            })
            .await
            .unwrap();
        assert!(completed);
        assert_eq!(items, vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn test_next_page_without_link() {
        let page = CollectionResponse {
            value: vec!["only".to_string()],
            ..Default::default()
        };
        let mut iterator = PageIterator::new(adapter(), page, ErrorMappings::odata());
        assert!(iterator.next_page().await.unwrap().is_none());
    }
}
