//! Shared helpers for graphgov integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use graphgov::GraphServiceClient;
use graphgov_abstractions::{AnonymousAuthenticationProvider, RequestAdapter};
use graphgov_http::{RateLimitConfig, RateLimiter, ReqwestRequestAdapter};
use serde_json::{json, Value};
use wiremock::MockServer;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("graphgov=debug,graphgov_http=debug")
        .try_init();
}

/// Client talking to `server` under `/v1.0`, without authentication.
pub fn test_client(server: &MockServer) -> GraphServiceClient {
    init_test_logging();
    let rate_limiter =
        RateLimiter::new(RateLimitConfig::for_testing()).expect("test rate limit config is valid");
    let adapter = ReqwestRequestAdapter::new(Arc::new(AnonymousAuthenticationProvider))
        .expect("adapter should build")
        .with_rate_limiter(rate_limiter);
    adapter.set_base_url(&format!("{}/v1.0", server.uri()));
    GraphServiceClient::new(Arc::new(adapter))
}

pub fn odata_error(code: &str, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "innerError": {
                "request-id": "7e1b2f0a-0000-0000-0000-000000000000",
                "date": "2024-05-01T10:00:00"
            }
        }
    })
}

pub fn access_package(id: &str, display_name: &str) -> Value {
    json!({
        "id": id,
        "displayName": display_name,
        "description": format!("{display_name} resources"),
        "isHidden": false,
        "createdDateTime": "2024-02-01T08:00:00Z",
        "modifiedDateTime": "2024-02-01T08:00:00Z"
    })
}
