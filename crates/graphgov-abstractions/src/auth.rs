//! Authentication hooks applied by the adapter before a request is sent.

use std::collections::HashSet;
use std::fmt;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::error::{GraphError, GraphResult};
use crate::request_information::RequestInformation;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Extra context for one authentication attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    /// Claims challenge from a continuous access evaluation 401.
    pub claims: Option<String>,
}

impl AuthContext {
    #[must_use]
    pub fn with_claims(claims: impl Into<String>) -> Self {
        Self {
            claims: Some(claims.into()),
        }
    }
}

/// Authenticates a request before it is sent.
#[async_trait]
pub trait AuthenticationProvider: Send + Sync + fmt::Debug {
    async fn authenticate_request(
        &self,
        request: &mut RequestInformation,
        context: &AuthContext,
    ) -> GraphResult<()>;
}

/// Leaves requests untouched. Useful for pre-authorized URLs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousAuthenticationProvider;

#[async_trait]
impl AuthenticationProvider for AnonymousAuthenticationProvider {
    async fn authenticate_request(
        &self,
        _request: &mut RequestInformation,
        _context: &AuthContext,
    ) -> GraphResult<()> {
        Ok(())
    }
}

/// Whether `url` points at the local machine, where plain http is tolerated.
#[must_use]
pub fn is_loopback_url(url: &Url) -> bool {
    matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"))
}

/// Host allow-list for token attachment. An empty list allows every host.
///
/// Only https URLs qualify, except loopback hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedHostsValidator {
    hosts: HashSet<String>,
}

impl AllowedHostsValidator {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|host| host.as_ref().trim().to_ascii_lowercase())
                .filter(|host| !host.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn is_url_host_valid(&self, url: &Url) -> bool {
        if url.scheme() != "https" && !is_loopback_url(url) {
            return false;
        }
        if self.hosts.is_empty() {
            return true;
        }
        url.host_str()
            .is_some_and(|host| self.hosts.contains(&host.to_ascii_lowercase()))
    }

    pub fn allowed_hosts(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(String::as_str)
    }
}

/// Supplies bearer tokens for a URL.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync + fmt::Debug {
    /// Returns a token for `url`, or an empty string when none should be sent.
    async fn get_authorization_token(&self, url: &Url, context: &AuthContext)
        -> GraphResult<String>;

    fn allowed_hosts_validator(&self) -> &AllowedHostsValidator;
}

/// Adds `Authorization: Bearer <token>` using an [`AccessTokenProvider`].
#[derive(Debug, Clone)]
pub struct BaseBearerTokenAuthenticationProvider<P> {
    token_provider: P,
}

impl<P: AccessTokenProvider> BaseBearerTokenAuthenticationProvider<P> {
    pub fn new(token_provider: P) -> Self {
        Self { token_provider }
    }

    pub fn token_provider(&self) -> &P {
        &self.token_provider
    }
}

#[async_trait]
impl<P: AccessTokenProvider> AuthenticationProvider for BaseBearerTokenAuthenticationProvider<P> {
    async fn authenticate_request(
        &self,
        request: &mut RequestInformation,
        context: &AuthContext,
    ) -> GraphResult<()> {
        // A claims challenge invalidates whatever token the request carried.
        if context.claims.is_some() {
            request.headers.remove(AUTHORIZATION_HEADER);
        }
        if request.headers.contains_key(AUTHORIZATION_HEADER) {
            return Ok(());
        }

        let url = request.uri()?;
        let token = self
            .token_provider
            .get_authorization_token(&url, context)
            .await?;
        if !token.is_empty() {
            request
                .headers
                .add(AUTHORIZATION_HEADER, format!("Bearer {token}"));
        }
        Ok(())
    }
}

/// Serves a token acquired elsewhere.
pub struct StaticTokenProvider {
    token: SecretString,
    validator: AllowedHostsValidator,
}

impl fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"[REDACTED]")
            .field("validator", &self.validator)
            .finish()
    }
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
            validator: AllowedHostsValidator::default(),
        }
    }

    #[must_use]
    pub fn with_allowed_hosts(mut self, validator: AllowedHostsValidator) -> Self {
        self.validator = validator;
        self
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn get_authorization_token(
        &self,
        url: &Url,
        context: &AuthContext,
    ) -> GraphResult<String> {
        if !self.validator.is_url_host_valid(url) {
            debug!(url = %url, "URL not allowed, sending request without token");
            return Ok(String::new());
        }
        if context.claims.is_some() {
            return Err(GraphError::Authentication(
                "static token cannot satisfy a claims challenge".to_string(),
            ));
        }
        Ok(self.token.expose_secret().clone())
    }

    fn allowed_hosts_validator(&self) -> &AllowedHostsValidator {
        &self.validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::method::HttpMethod;
    use crate::request_information::RAW_URL_KEY;

    fn request_for(url: &str) -> RequestInformation {
        let mut params = BTreeMap::new();
        params.insert(RAW_URL_KEY.to_string(), url.to_string());
        RequestInformation::new(HttpMethod::Get, "", params)
    }

    #[test]
    fn test_allowed_hosts() {
        let validator = AllowedHostsValidator::new(["Graph.Microsoft.com"]);
        assert!(validator.is_url_host_valid(&Url::parse("https://graph.microsoft.com/v1.0").unwrap()));
        assert!(!validator.is_url_host_valid(&Url::parse("https://evil.example.com").unwrap()));
        assert!(AllowedHostsValidator::default()
            .is_url_host_valid(&Url::parse("https://anything.example").unwrap()));
    }

    #[test]
    fn test_allowed_hosts_require_https_except_loopback() {
        let validator = AllowedHostsValidator::new(["graph.microsoft.com", "localhost"]);
        assert!(!validator.is_url_host_valid(&Url::parse("http://graph.microsoft.com/v1.0").unwrap()));
        assert!(validator.is_url_host_valid(&Url::parse("http://localhost:8080/v1.0").unwrap()));

        let open = AllowedHostsValidator::default();
        assert!(!open.is_url_host_valid(&Url::parse("http://anything.example").unwrap()));
        assert!(!open.is_url_host_valid(&Url::parse("ftp://anything.example").unwrap()));
        assert!(open.is_url_host_valid(&Url::parse("http://127.0.0.1:3000").unwrap()));
        assert!(open.is_url_host_valid(&Url::parse("http://[::1]:3000").unwrap()));
    }

    #[tokio::test]
    async fn test_static_token_not_sent_over_plain_http() {
        let provider = BaseBearerTokenAuthenticationProvider::new(StaticTokenProvider::new("tok"));
        let mut request = request_for("http://graph.microsoft.com/v1.0/identityGovernance");

        provider
            .authenticate_request(&mut request, &AuthContext::default())
            .await
            .unwrap();

        assert!(!request.headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_bearer_header_added() {
        let provider = BaseBearerTokenAuthenticationProvider::new(StaticTokenProvider::new("tok"));
        let mut request = request_for("https://graph.microsoft.com/v1.0/identityGovernance");

        provider
            .authenticate_request(&mut request, &AuthContext::default())
            .await
            .unwrap();

        assert_eq!(request.headers.first("authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_existing_header_kept_without_claims() {
        let provider = BaseBearerTokenAuthenticationProvider::new(StaticTokenProvider::new("tok"));
        let mut request = request_for("https://graph.microsoft.com/v1.0/identityGovernance");
        request.headers.add("Authorization", "Bearer old");

        provider
            .authenticate_request(&mut request, &AuthContext::default())
            .await
            .unwrap();

        assert_eq!(request.headers.get("authorization").unwrap().len(), 1);
        assert_eq!(request.headers.first("authorization"), Some("Bearer old"));
    }

    #[tokio::test]
    async fn test_claims_remove_existing_header() {
        let provider = BaseBearerTokenAuthenticationProvider::new(StaticTokenProvider::new("tok"));
        let mut request = request_for("https://graph.microsoft.com/v1.0/identityGovernance");
        request.headers.add("Authorization", "Bearer old");

        let result = provider
            .authenticate_request(&mut request, &AuthContext::with_claims("eyJ"))
            .await;

        assert!(matches!(result, Err(GraphError::Authentication(_))));
        assert!(!request.headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_disallowed_host_gets_no_token() {
        let provider = BaseBearerTokenAuthenticationProvider::new(
            StaticTokenProvider::new("tok")
                .with_allowed_hosts(AllowedHostsValidator::new(["graph.microsoft.com"])),
        );
        let mut request = request_for("https://attacker.example.com/collect");

        provider
            .authenticate_request(&mut request, &AuthContext::default())
            .await
            .unwrap();

        assert!(!request.headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_anonymous_provider_is_noop() {
        let mut request = request_for("https://graph.microsoft.com/v1.0/identityGovernance");
        AnonymousAuthenticationProvider
            .authenticate_request(&mut request, &AuthContext::default())
            .await
            .unwrap();
        assert!(request.headers.is_empty());
    }
}
