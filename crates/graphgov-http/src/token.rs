//! OAuth2 client-credentials tokens for Microsoft Graph.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use graphgov_abstractions::{
    is_loopback_url, AccessTokenProvider, AllowedHostsValidator, AuthContext, GraphError,
    GraphResult,
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::GraphClientConfig;

/// OAuth2 token response from the identity platform.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
    #[allow(dead_code)]
    token_type: String,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// True if the token is expired or will expire within the grace period.
    fn is_expired(&self, grace_period: Duration) -> bool {
        Utc::now() + grace_period >= self.expires_at
    }
}

/// App-only token provider with an in-memory cache.
///
/// Tokens are refreshed five minutes before they expire. A request carrying a
/// claims challenge always fetches a fresh token and forwards the claims.
/// Concurrent callers share a single refresh.
#[derive(Debug)]
pub struct ClientCredentialsTokenProvider {
    client_id: String,
    client_secret: SecretString,
    token_url: String,
    scope: String,
    http_client: reqwest::Client,
    validator: AllowedHostsValidator,
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    refresh_lock: Mutex<()>,
    grace_period: Duration,
}

impl ClientCredentialsTokenProvider {
    pub fn new(config: &GraphClientConfig, http_client: reqwest::Client) -> Self {
        Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: config.token_url(),
            scope: config.scope(),
            http_client,
            validator: AllowedHostsValidator::new(config.token_hosts()),
            cached_token: Arc::new(RwLock::new(None)),
            refresh_lock: Mutex::new(()),
            grace_period: Duration::minutes(5),
        }
    }

    /// Gets a valid access token, refreshing if necessary.
    #[instrument(skip(self, claims), fields(claims = claims.is_some()))]
    pub async fn get_token(&self, claims: Option<&str>) -> GraphResult<String> {
        if claims.is_none() {
            if let Some(token) = self.cached().await {
                debug!("Using cached token");
                return Ok(token);
            }
        }

        let _refresh = self.refresh_lock.lock().await;
        // Another caller may have refreshed while we waited.
        if claims.is_none() {
            if let Some(token) = self.cached().await {
                debug!("Using token refreshed by a concurrent caller");
                return Ok(token);
            }
        }

        debug!("Refreshing access token");
        let new_token = self.acquire_token(claims).await?;
        let access_token = new_token.access_token.clone();
        *self.cached_token.write().await = Some(new_token);
        Ok(access_token)
    }

    async fn cached(&self) -> Option<String> {
        self.cached_token
            .read()
            .await
            .as_ref()
            .filter(|token| !token.is_expired(self.grace_period))
            .map(|token| token.access_token.clone())
    }

    /// Acquires a new access token using the client credentials flow.
    async fn acquire_token(&self, claims: Option<&str>) -> GraphResult<CachedToken> {
        let mut params = vec![
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret().as_str()),
            ("scope", self.scope.as_str()),
        ];
        if let Some(claims) = claims {
            params.push(("claims", claims));
        }

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| GraphError::Authentication(format!("Token request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Token request rejected");
            return Err(GraphError::Authentication(format!(
                "Token request failed with status {status}: {body}"
            )));
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            GraphError::Authentication(format!("Failed to parse token response: {e}"))
        })?;

        let expires_at = Utc::now() + Duration::seconds(token_response.expires_in);
        debug!(
            "Acquired new token, expires at {}",
            expires_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        Ok(CachedToken {
            access_token: token_response.access_token,
            expires_at,
        })
    }

    /// Invalidates the cached token, forcing a refresh on next use.
    pub async fn invalidate(&self) {
        *self.cached_token.write().await = None;
    }
}

#[async_trait]
impl AccessTokenProvider for ClientCredentialsTokenProvider {
    async fn get_authorization_token(
        &self,
        url: &Url,
        context: &AuthContext,
    ) -> GraphResult<String> {
        if url.scheme() != "https" && !is_loopback_url(url) {
            return Err(GraphError::Authentication(
                "only scheme https is supported".to_string(),
            ));
        }
        if !self.validator.is_url_host_valid(url) {
            debug!(host = ?url.host_str(), "Host not allowed, sending request without token");
            return Ok(String::new());
        }
        self.get_token(context.claims.as_deref()).await
    }

    fn allowed_hosts_validator(&self) -> &AllowedHostsValidator {
        &self.validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(hosts: &[&str]) -> ClientCredentialsTokenProvider {
        let config = GraphClientConfig::builder()
            .tenant_id("tenant")
            .client_id("client")
            .client_secret("secret")
            .allowed_hosts(hosts.iter().copied())
            .build()
            .unwrap();
        ClientCredentialsTokenProvider::new(&config, reqwest::Client::new())
    }

    #[test]
    fn test_cached_token_expiry() {
        let token = CachedToken {
            access_token: "test".to_string(),
            expires_at: Utc::now() + Duration::minutes(10),
        };
        assert!(!token.is_expired(Duration::minutes(5)));
        assert!(token.is_expired(Duration::minutes(15)));
    }

    #[test]
    fn test_validator_defaults_to_graph_host() {
        let provider = provider(&[]);
        let hosts: Vec<_> = provider.allowed_hosts_validator().allowed_hosts().collect();
        assert_eq!(hosts, vec!["graph.microsoft.com"]);
    }

    #[tokio::test]
    async fn test_disallowed_host_returns_empty_token() {
        let provider = provider(&["graph.microsoft.com"]);
        let url = Url::parse("https://example.com/resource").unwrap();
        let token = provider
            .get_authorization_token(&url, &AuthContext::default())
            .await
            .unwrap();
        assert!(token.is_empty());
    }

    #[tokio::test]
    async fn test_plain_http_rejected_for_remote_hosts() {
        let provider = provider(&["graph.example.com"]);
        let url = Url::parse("http://graph.example.com/v1.0").unwrap();
        let result = provider
            .get_authorization_token(&url, &AuthContext::default())
            .await;
        assert!(matches!(result, Err(GraphError::Authentication(_))));
    }

    #[tokio::test]
    async fn test_cached_token_is_reused() {
        let provider = provider(&[]);
        *provider.cached_token.write().await = Some(CachedToken {
            access_token: "cached".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        });

        assert_eq!(provider.get_token(None).await.unwrap(), "cached");

        provider.invalidate().await;
        assert!(provider.cached_token.read().await.is_none());
    }
}
