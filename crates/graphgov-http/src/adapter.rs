//! reqwest implementation of the request adapter.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use graphgov_abstractions::{
    AuthContext, AuthenticationProvider, BaseBearerTokenAuthenticationProvider, ErrorMappings,
    GraphError, GraphResult, HeadersInspectionOption, HttpMethod, NativeResponse,
    RequestAdapter, RequestInformation, ResponseHeaders, RetryHandlerOption, BASE_URL_KEY,
};
use reqwest::header::HeaderMap;
use reqwest::Method;
use tracing::{debug, field, instrument, Span};

use crate::config::GraphClientConfig;
use crate::rate_limit::RateLimiter;
use crate::token::ClientCredentialsTokenProvider;

const WWW_AUTHENTICATE: &str = "www-authenticate";
const RETRY_AFTER: &str = "retry-after";

fn default_user_agent() -> String {
    format!("graphgov/{}", env!("CARGO_PKG_VERSION"))
}

/// Sends [`RequestInformation`] over HTTP with `reqwest`.
#[derive(Debug)]
pub struct ReqwestRequestAdapter {
    http_client: reqwest::Client,
    auth_provider: Arc<dyn AuthenticationProvider>,
    base_url: RwLock<String>,
    rate_limiter: Arc<RateLimiter>,
}

impl ReqwestRequestAdapter {
    /// Creates an adapter with a default HTTP client.
    pub fn new(auth_provider: Arc<dyn AuthenticationProvider>) -> GraphResult<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(default_user_agent())
            .build()
            .map_err(GraphError::transport)?;
        Ok(Self::with_client(auth_provider, http_client))
    }

    /// Creates an adapter around an existing client (useful for testing).
    pub fn with_client(
        auth_provider: Arc<dyn AuthenticationProvider>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            http_client,
            auth_provider,
            base_url: RwLock::new(String::new()),
            rate_limiter: Arc::new(RateLimiter::default()),
        }
    }

    /// Creates an app-only adapter authenticated with client credentials.
    pub fn from_config(config: &GraphClientConfig) -> GraphResult<Self> {
        config
            .validate()
            .map_err(|e| GraphError::Config(e.to_string()))?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(GraphError::transport)?;

        let token_provider = ClientCredentialsTokenProvider::new(config, http_client.clone());
        let auth_provider = Arc::new(BaseBearerTokenAuthenticationProvider::new(token_provider));
        let rate_limiter = RateLimiter::new(config.rate_limit.clone()).map_err(GraphError::Config)?;

        let adapter = Self::with_client(auth_provider, http_client).with_rate_limiter(rate_limiter);
        adapter.set_base_url(&config.base_url());
        Ok(adapter)
    }

    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiter) -> Self {
        self.rate_limiter = Arc::new(rate_limiter);
        self
    }

    /// Shared throttling state, for metrics.
    #[must_use]
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    fn to_reqwest(&self, info: &RequestInformation) -> GraphResult<reqwest::Request> {
        let url = info.uri()?;
        let mut builder = self.http_client.request(to_method(info.method), url);
        for (name, values) in info.headers.iter() {
            for value in values {
                builder = builder.header(name, value);
            }
        }
        if let Some(content) = &info.content {
            builder = builder.body(content.clone());
        }
        builder.build().map_err(GraphError::transport)
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Options => Method::OPTIONS,
        HttpMethod::Connect => Method::CONNECT,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Trace => Method::TRACE,
        HttpMethod::Head => Method::HEAD,
    }
}

fn collect_headers(map: &HeaderMap) -> ResponseHeaders {
    let mut headers = ResponseHeaders::new();
    for (name, value) in map {
        if let Ok(value) = value.to_str() {
            headers.add(name.as_str(), value);
        }
    }
    headers
}

/// Extracts `claims="..."` from a `Bearer` challenge.
fn parse_claims_challenge(header: &str) -> Option<String> {
    let header = header.trim_start();
    let scheme = header.get(..6)?;
    if !scheme.eq_ignore_ascii_case("bearer") || !header[6..].starts_with(char::is_whitespace) {
        return None;
    }
    header[6..]
        .split(',')
        .map(str::trim)
        .find(|parameter| parameter.starts_with("claims"))
        .and_then(|parameter| {
            let start = parameter.find('"')? + 1;
            let end = start + parameter[start..].find('"')?;
            Some(parameter[start..end].to_string())
        })
        .filter(|claims| !claims.is_empty())
}

/// Span name in the form `GET - {+baseurl}/identityGovernance`.
fn span_name(info: &RequestInformation) -> String {
    let template = info.url_template.replace("%24", "$");
    let path = match template.find("{?") {
        Some(start) => &template[..start],
        None => template.as_str(),
    };
    format!("{} - {}", info.method, path)
}

#[async_trait]
impl RequestAdapter for ReqwestRequestAdapter {
    fn base_url(&self) -> String {
        self.base_url
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_base_url(&self, base_url: &str) {
        *self.base_url.write().unwrap_or_else(PoisonError::into_inner) =
            base_url.trim_end_matches('/').to_string();
    }

    #[instrument(
        name = "graph_request",
        skip_all,
        fields(
            otel.name = %span_name(&request),
            http.method = %request.method,
            http.uri_template = %request.url_template,
            http.status_code = field::Empty,
            http.retry_count = field::Empty,
        )
    )]
    async fn execute(
        &self,
        request: RequestInformation,
        error_mappings: &ErrorMappings,
    ) -> GraphResult<Option<NativeResponse>> {
        let mut request = request;
        request
            .path_parameters
            .insert(BASE_URL_KEY.to_string(), self.base_url());

        // Unresolved on early return, the permit fails a half-open trial on drop.
        let permit = self.rate_limiter.check_circuit().await?;
        let budget = self
            .rate_limiter
            .budget(request.request_option::<RetryHandlerOption>());
        let inspection = request.request_option::<HeadersInspectionOption>().cloned();

        let mut claims: Option<String> = None;
        let mut attempt: u32 = 0;
        loop {
            let mut outgoing = request.clone();
            let context = AuthContext {
                claims: claims.clone(),
            };
            self.auth_provider
                .authenticate_request(&mut outgoing, &context)
                .await?;
            if let Some(inspection) = inspection.as_ref().filter(|i| i.inspect_request()) {
                inspection.record_request_headers(&outgoing.headers);
            }

            let http_request = self.to_reqwest(&outgoing)?;
            debug!(method = %outgoing.method, url = %http_request.url(), "Sending Graph request");
            let response = match self.http_client.execute(http_request).await {
                Ok(response) => response,
                Err(e) => {
                    permit.fail();
                    return Err(GraphError::transport(e));
                }
            };

            let status = response.status().as_u16();
            let headers = collect_headers(response.headers());

            // Continuous access evaluation: one retry with the challenged claims.
            if status == 401 && claims.is_none() {
                if let Some(challenge) = headers.first(WWW_AUTHENTICATE).and_then(parse_claims_challenge) {
                    debug!("Received claims challenge, re-authenticating");
                    self.rate_limiter.record_claims_challenge().await;
                    Span::current().record("http.retry_count", 1);
                    claims = Some(challenge);
                    continue;
                }
            }

            if RateLimiter::is_retryable_status(status) {
                let retry_after = headers.first(RETRY_AFTER);
                if self
                    .rate_limiter
                    .handle_retryable_response(status, retry_after, attempt, &budget)
                    .await
                {
                    attempt += 1;
                    Span::current().record("http.retry_count", attempt);
                    continue;
                }
                permit.fail();
            } else {
                permit.succeed();
            }

            Span::current().record("http.status_code", status);
            if let Some(inspection) = inspection.as_ref().filter(|i| i.inspect_response()) {
                inspection.record_response_headers(&headers);
            }

            let body = response.bytes().await.map_err(GraphError::transport)?;
            if status >= 400 {
                debug!(status, "Graph request failed");
                return Err(error_mappings.map_error(status, &headers, &body));
            }
            if status == 204 || body.is_empty() {
                return Ok(None);
            }
            return Ok(Some(NativeResponse {
                status,
                headers,
                body,
            }));
        }
    }
}
