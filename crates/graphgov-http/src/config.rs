//! Client configuration for the Graph adapter.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::rate_limit::RateLimitConfig;

/// National cloud hosting the tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloudEnvironment {
    #[default]
    Global,
    UsGovernment,
    UsGovernmentDod,
    China,
    Germany,
}

impl CloudEnvironment {
    /// Microsoft identity platform authority host.
    #[must_use]
    pub fn login_endpoint(&self) -> &'static str {
        match self {
            Self::Global => "https://login.microsoftonline.com",
            Self::UsGovernment | Self::UsGovernmentDod => "https://login.microsoftonline.us",
            Self::China => "https://login.chinacloudapi.cn",
            Self::Germany => "https://login.microsoftonline.de",
        }
    }

    /// Graph service root, without API version.
    #[must_use]
    pub fn graph_endpoint(&self) -> &'static str {
        match self {
            Self::Global => "https://graph.microsoft.com",
            Self::UsGovernment => "https://graph.microsoft.us",
            Self::UsGovernmentDod => "https://dod-graph.microsoft.us",
            Self::China => "https://microsoftgraph.chinacloudapi.cn",
            Self::Germany => "https://graph.microsoft.de",
        }
    }

    /// Host name of [`CloudEnvironment::graph_endpoint`].
    #[must_use]
    pub fn graph_host(&self) -> &'static str {
        self.graph_endpoint().trim_start_matches("https://")
    }
}

impl fmt::Display for CloudEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Global => "global",
            Self::UsGovernment => "usgov",
            Self::UsGovernmentDod => "usgov-dod",
            Self::China => "china",
            Self::Germany => "germany",
        };
        f.write_str(name)
    }
}

impl FromStr for CloudEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" | "commercial" | "public" => Ok(Self::Global),
            "usgov" | "us_government" | "usgovernment" | "gcchigh" => Ok(Self::UsGovernment),
            "usgov-dod" | "dod" | "usgovernmentdod" => Ok(Self::UsGovernmentDod),
            "china" | "21vianet" => Ok(Self::China),
            "germany" => Ok(Self::Germany),
            other => Err(ConfigError::InvalidValue(
                "GRAPHGOV_CLOUD".into(),
                format!("unknown cloud environment '{other}'"),
            )),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for an app-only Graph client.
#[derive(Debug, Clone)]
pub struct GraphClientConfig {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: SecretString,
    pub cloud: CloudEnvironment,
    /// `v1.0` or `beta`.
    pub api_version: String,
    /// Per-request timeout of the HTTP client.
    pub timeout: Duration,
    pub user_agent: String,
    /// Hosts that may receive the bearer token; empty means the Graph host only.
    pub allowed_hosts: Vec<String>,
    pub rate_limit: RateLimitConfig,
    /// Overrides the Graph root (tests point this at a mock server).
    pub graph_endpoint_override: Option<String>,
    /// Overrides the login authority (tests point this at a mock server).
    pub login_endpoint_override: Option<String>,
}

impl GraphClientConfig {
    #[must_use]
    pub fn builder() -> GraphClientConfigBuilder {
        GraphClientConfigBuilder::default()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_reader(|key| std::env::var(key))
    }

    /// Load configuration from a custom variable reader.
    ///
    /// Tests supply variables this way without touching the process
    /// environment.
    pub fn from_reader<F>(reader: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let tenant_id = reader("GRAPHGOV_TENANT_ID")
            .map_err(|_| ConfigError::MissingVar("GRAPHGOV_TENANT_ID".into()))?;
        let client_id = reader("GRAPHGOV_CLIENT_ID")
            .map_err(|_| ConfigError::MissingVar("GRAPHGOV_CLIENT_ID".into()))?;
        let client_secret = reader("GRAPHGOV_CLIENT_SECRET")
            .map_err(|_| ConfigError::MissingVar("GRAPHGOV_CLIENT_SECRET".into()))?;

        let cloud = match reader("GRAPHGOV_CLOUD") {
            Ok(value) => value.parse::<CloudEnvironment>()?,
            Err(_) => CloudEnvironment::default(),
        };

        let api_version =
            reader("GRAPHGOV_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let timeout_secs = reader("GRAPHGOV_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidValue("GRAPHGOV_TIMEOUT_SECS".into(), e.to_string()))?;

        let mut rate_limit = RateLimitConfig::default();
        if let Ok(value) = reader("GRAPHGOV_MAX_RETRIES") {
            rate_limit.max_retries = value.parse::<u32>().map_err(|e| {
                ConfigError::InvalidValue("GRAPHGOV_MAX_RETRIES".into(), e.to_string())
            })?;
        }

        Self::builder()
            .tenant_id(tenant_id)
            .client_id(client_id)
            .client_secret(client_secret)
            .cloud(cloud)
            .api_version(api_version)
            .timeout(Duration::from_secs(timeout_secs))
            .rate_limit(rate_limit)
            .build()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tenant_id.trim().is_empty() {
            return Err(ConfigError::Invalid("tenant_id is required".into()));
        }
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::Invalid("client_id is required".into()));
        }
        if self.client_secret.expose_secret().trim().is_empty() {
            return Err(ConfigError::Invalid("client_secret is required".into()));
        }
        if !matches!(self.api_version.as_str(), "v1.0" | "beta") {
            return Err(ConfigError::InvalidValue(
                "GRAPHGOV_API_VERSION".into(),
                format!("expected v1.0 or beta, got '{}'", self.api_version),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::Invalid("timeout must be > 0".into()));
        }
        self.rate_limit.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }

    #[must_use]
    pub fn graph_endpoint(&self) -> &str {
        self.graph_endpoint_override
            .as_deref()
            .unwrap_or_else(|| self.cloud.graph_endpoint())
            .trim_end_matches('/')
    }

    #[must_use]
    pub fn login_endpoint(&self) -> &str {
        self.login_endpoint_override
            .as_deref()
            .unwrap_or_else(|| self.cloud.login_endpoint())
            .trim_end_matches('/')
    }

    /// Service root requests are sent to, e.g. `https://graph.microsoft.com/v1.0`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}/{}", self.graph_endpoint(), self.api_version)
    }

    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}/{}/oauth2/v2.0/token", self.login_endpoint(), self.tenant_id)
    }

    /// Scope requested for app-only tokens.
    #[must_use]
    pub fn scope(&self) -> String {
        format!("{}/.default", self.cloud.graph_endpoint())
    }

    /// Hosts that receive the bearer token.
    #[must_use]
    pub fn token_hosts(&self) -> Vec<String> {
        if !self.allowed_hosts.is_empty() {
            return self.allowed_hosts.clone();
        }
        let graph = self.graph_endpoint();
        let host = url::Url::parse(graph)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| self.cloud.graph_host().to_string());
        vec![host]
    }
}

const DEFAULT_API_VERSION: &str = "v1.0";
const DEFAULT_TIMEOUT_SECS: u64 = 100;

fn default_user_agent() -> String {
    format!("graphgov/{}", env!("CARGO_PKG_VERSION"))
}

/// Builder for [`GraphClientConfig`].
#[derive(Debug, Default)]
pub struct GraphClientConfigBuilder {
    tenant_id: Option<String>,
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    cloud: CloudEnvironment,
    api_version: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    allowed_hosts: Vec<String>,
    rate_limit: Option<RateLimitConfig>,
    graph_endpoint_override: Option<String>,
    login_endpoint_override: Option<String>,
}

impl GraphClientConfigBuilder {
    #[must_use]
    pub fn tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    #[must_use]
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(SecretString::new(client_secret.into()));
        self
    }

    #[must_use]
    pub fn cloud(mut self, cloud: CloudEnvironment) -> Self {
        self.cloud = cloud;
        self
    }

    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    #[must_use]
    pub fn allowed_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = Some(rate_limit);
        self
    }

    #[must_use]
    pub fn graph_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.graph_endpoint_override = Some(endpoint.into());
        self
    }

    #[must_use]
    pub fn login_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.login_endpoint_override = Some(endpoint.into());
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<GraphClientConfig, ConfigError> {
        let config = GraphClientConfig {
            tenant_id: self
                .tenant_id
                .ok_or_else(|| ConfigError::Invalid("tenant_id is required".into()))?,
            client_id: self
                .client_id
                .ok_or_else(|| ConfigError::Invalid("client_id is required".into()))?,
            client_secret: self
                .client_secret
                .ok_or_else(|| ConfigError::Invalid("client_secret is required".into()))?,
            cloud: self.cloud,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            allowed_hosts: self.allowed_hosts,
            rate_limit: self.rate_limit.unwrap_or_default(),
            graph_endpoint_override: self.graph_endpoint_override,
            login_endpoint_override: self.login_endpoint_override,
        };
        config.validate()?;
        Ok(config)
    }
}
