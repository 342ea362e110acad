//! reqwest-based request adapter for the Microsoft Graph API.
//!
//! Implements the `graphgov-abstractions` [`RequestAdapter`] contract over
//! HTTPS with app-only (client credentials) authentication.
//!
//! # Features
//!
//! - `OAuth2` client credentials with token caching
//! - Continuous access evaluation (claims challenge) re-authentication
//! - Retry of `429`/`503`/`504` honouring `Retry-After`
//! - Circuit breaker for sustained throttling
//! - National cloud endpoints (US Government, DoD, China, Germany)
//!
//! # Example
//!
//! ```no_run
//! use graphgov_http::{GraphClientConfig, ReqwestRequestAdapter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GraphClientConfig::builder()
//!     .tenant_id("your-tenant-id")
//!     .client_id("your-client-id")
//!     .client_secret("your-client-secret")
//!     .build()?;
//!
//! let adapter = ReqwestRequestAdapter::from_config(&config)?;
//! # let _ = adapter;
//! # Ok(())
//! # }
//! ```
//!
//! [`RequestAdapter`]: graphgov_abstractions::RequestAdapter

mod adapter;
mod circuit_breaker;
mod config;
mod metrics;
mod rate_limit;
mod token;

// Re-exports
pub use adapter::ReqwestRequestAdapter;
pub use circuit_breaker::{CircuitBreaker, CircuitBreakerState};
pub use config::{CloudEnvironment, ConfigError, GraphClientConfig, GraphClientConfigBuilder};
pub use metrics::RateLimitMetrics;
pub use rate_limit::{CircuitPermit, RateLimitConfig, RateLimiter, RetryBudget};
pub use token::ClientCredentialsTokenProvider;
