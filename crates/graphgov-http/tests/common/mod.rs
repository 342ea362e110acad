//! Common test utilities for graphgov-http integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use graphgov_abstractions::{HttpMethod, RequestInformation};
use graphgov_http::{GraphClientConfig, RateLimitConfig, ReqwestRequestAdapter};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TENANT_ID: &str = "contoso-tenant";

/// Installs a test subscriber once; later calls are no-ops.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}

/// Creates a mock OAuth token response.
pub fn create_token_response(access_token: &str, expires_in: u64) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": expires_in
    })
}

/// Creates an OData error response.
pub fn create_odata_error(code: &str, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "innerError": {
                "request-id": "00000000-0000-0000-0000-000000000001",
                "date": "2024-05-01T10:00:00"
            }
        }
    })
}

/// Configuration pointing both the login authority and Graph at the mock server.
pub fn test_config(server: &MockServer) -> GraphClientConfig {
    GraphClientConfig::builder()
        .tenant_id(TENANT_ID)
        .client_id("client-id")
        .client_secret("client-secret")
        .graph_endpoint(server.uri())
        .login_endpoint(server.uri())
        .rate_limit(RateLimitConfig::for_testing())
        .build()
        .expect("test config should be valid")
}

pub fn test_adapter(server: &MockServer) -> ReqwestRequestAdapter {
    init_test_logging();
    ReqwestRequestAdapter::from_config(&test_config(server)).expect("adapter should build")
}

/// Mounts the token endpoint returning `mock-access-token`.
pub async fn mock_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("/{TENANT_ID}/oauth2/v2.0/token")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(create_token_response("mock-access-token", 3600)),
        )
        .mount(server)
        .await;
}

/// Request against `{+baseurl}` + `path`; the adapter fills in the base URL.
pub fn request(method: HttpMethod, path: &str) -> RequestInformation {
    RequestInformation::new(
        method,
        format!("{{+baseurl}}{path}{{?%24expand,%24select}}"),
        BTreeMap::new(),
    )
}
