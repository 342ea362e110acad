//! Per-request options understood by request adapters.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::headers::Headers;

/// An option attached to a single request.
pub trait RequestOption: Any + Send + Sync + fmt::Debug {
    /// Key under which the option is stored; one option per key.
    fn key(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

/// Options attached to a request, keyed by [`RequestOption::key`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    options: HashMap<&'static str, Arc<dyn RequestOption>>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, replacing one with the same key.
    pub fn add(&mut self, option: impl RequestOption) {
        self.options.insert(option.key(), Arc::new(option));
    }

    pub fn add_shared(&mut self, option: Arc<dyn RequestOption>) {
        self.options.insert(option.key(), option);
    }

    pub fn add_all(&mut self, other: &RequestOptions) {
        for option in other.options.values() {
            self.add_shared(Arc::clone(option));
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.options.remove(key).is_some()
    }

    /// Returns the option of type `T`, if one is attached.
    #[must_use]
    pub fn get<T: RequestOption>(&self) -> Option<&T> {
        self.options
            .values()
            .find_map(|option| option.as_any().downcast_ref::<T>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Overrides the adapter's retry budget for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryHandlerOption {
    /// Maximum retries for throttled or unavailable responses.
    pub max_retries: u32,
    /// Base delay before the first retry when no `Retry-After` is sent.
    pub delay: Duration,
    /// When `false`, the response is returned as-is without retrying.
    pub enabled: bool,
}

impl Default for RetryHandlerOption {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay: Duration::from_secs(3),
            enabled: true,
        }
    }
}

impl RetryHandlerOption {
    pub const KEY: &'static str = "RetryHandlerOption";

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl RequestOption for RetryHandlerOption {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Default)]
struct InspectedHeaders {
    request: Headers,
    response: Headers,
}

/// Asks the adapter to copy the request and response headers of a call.
///
/// Clones share the captured headers, so the caller keeps a clone and reads
/// it after the request completes.
#[derive(Debug, Clone, Default)]
pub struct HeadersInspectionOption {
    inspect_request: bool,
    inspect_response: bool,
    captured: Arc<Mutex<InspectedHeaders>>,
}

impl HeadersInspectionOption {
    pub const KEY: &'static str = "HeadersInspectionOption";

    #[must_use]
    pub fn new(inspect_request: bool, inspect_response: bool) -> Self {
        Self {
            inspect_request,
            inspect_response,
            captured: Arc::default(),
        }
    }

    #[must_use]
    pub fn inspect_request(&self) -> bool {
        self.inspect_request
    }

    #[must_use]
    pub fn inspect_response(&self) -> bool {
        self.inspect_response
    }

    pub fn record_request_headers(&self, headers: &Headers) {
        let mut captured = self.captured.lock().unwrap_or_else(PoisonError::into_inner);
        captured.request = headers.clone();
    }

    pub fn record_response_headers(&self, headers: &Headers) {
        let mut captured = self.captured.lock().unwrap_or_else(PoisonError::into_inner);
        captured.response = headers.clone();
    }

    #[must_use]
    pub fn request_headers(&self) -> Headers {
        let captured = self.captured.lock().unwrap_or_else(PoisonError::into_inner);
        captured.request.clone()
    }

    #[must_use]
    pub fn response_headers(&self) -> Headers {
        let captured = self.captured.lock().unwrap_or_else(PoisonError::into_inner);
        captured.response.clone()
    }
}

impl RequestOption for HeadersInspectionOption {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_type() {
        let mut options = RequestOptions::new();
        options.add(RetryHandlerOption {
            max_retries: 7,
            ..Default::default()
        });

        assert_eq!(options.get::<RetryHandlerOption>().unwrap().max_retries, 7);
        assert!(options.get::<HeadersInspectionOption>().is_none());
    }

    #[test]
    fn test_same_key_replaces() {
        let mut options = RequestOptions::new();
        options.add(RetryHandlerOption::default());
        options.add(RetryHandlerOption::disabled());

        assert_eq!(options.len(), 1);
        assert!(!options.get::<RetryHandlerOption>().unwrap().enabled);
        assert!(options.remove(RetryHandlerOption::KEY));
        assert!(options.is_empty());
    }

    #[test]
    fn test_inspection_clones_share_capture() {
        let option = HeadersInspectionOption::new(true, true);
        let mut options = RequestOptions::new();
        options.add(option.clone());

        let mut headers = Headers::new();
        headers.add("request-id", "r-1");
        options
            .get::<HeadersInspectionOption>()
            .unwrap()
            .record_response_headers(&headers);

        assert_eq!(option.response_headers().first("request-id"), Some("r-1"));
        assert!(option.request_headers().is_empty());
    }
}
