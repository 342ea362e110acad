//! Retry handling for throttled and unavailable Graph responses.
//!
//! `429`, `503` and `504` responses are retried. The delay honours
//! `Retry-After` (delta seconds or HTTP-date) and otherwise grows
//! exponentially with jitter, capped at `max_delay_ms`. Sustained throttling
//! opens a circuit breaker so new requests fail fast.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use graphgov_abstractions::{GraphError, GraphResult, RetryHandlerOption};
use rand::Rng;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::circuit_breaker::{CircuitBreaker, CircuitBreakerState};
use crate::metrics::RateLimitMetrics;

/// Configuration for rate limit handling.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    /// Base delay for exponential backoff in milliseconds (default: 1000ms).
    pub base_delay_ms: u64,
    /// Maximum delay between attempts in milliseconds (default: 180000ms).
    pub max_delay_ms: u64,
    /// Jitter factor as a fraction of delay (default: 0.25).
    pub jitter_factor: f64,
    /// Retries per request (default: 3).
    pub max_retries: u32,
    /// Throttled responses required to open the circuit (default: 10).
    pub circuit_failure_threshold: u32,
    /// Window in seconds for counting throttled responses (default: 300).
    pub circuit_failure_window_secs: u64,
    /// Seconds the circuit stays open (default: 30).
    pub circuit_open_duration_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 1000,
            max_delay_ms: 180_000,
            jitter_factor: 0.25,
            max_retries: 3,
            circuit_failure_threshold: 10,
            circuit_failure_window_secs: 300,
            circuit_open_duration_secs: 30,
        }
    }
}

impl RateLimitConfig {
    /// Short delays for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            base_delay_ms: 10,
            max_delay_ms: 100,
            jitter_factor: 0.0,
            max_retries: 3,
            circuit_failure_threshold: 5,
            circuit_failure_window_secs: 60,
            circuit_open_duration_secs: 1,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_delay_ms == 0 {
            return Err("base_delay_ms must be > 0".to_string());
        }
        if self.max_delay_ms < self.base_delay_ms {
            return Err("max_delay_ms must be >= base_delay_ms".to_string());
        }
        if !(0.0..=1.0).contains(&self.jitter_factor) {
            return Err("jitter_factor must be in range [0.0, 1.0]".to_string());
        }
        if self.circuit_failure_threshold == 0 {
            return Err("circuit_failure_threshold must be > 0".to_string());
        }
        Ok(())
    }
}

/// Retry budget for one request, after per-request overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget {
    pub max_retries: u32,
    pub base_delay: Duration,
}

/// Shared retry, throttling and circuit state of an adapter.
#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    circuit_breaker: Arc<Mutex<CircuitBreaker>>,
    metrics: Arc<RwLock<RateLimitMetrics>>,
}

/// Admission of one request through the circuit breaker.
///
/// A permit issued while the circuit is half-open carries the trial. The
/// trial is resolved by [`succeed`](Self::succeed) or [`fail`](Self::fail);
/// a permit dropped unresolved (early return, cancelled future) counts as a
/// failed trial, so the breaker always leaves the half-open state.
#[derive(Debug)]
#[must_use]
pub struct CircuitPermit {
    circuit_breaker: Arc<Mutex<CircuitBreaker>>,
    metrics: Arc<RwLock<RateLimitMetrics>>,
    trial: bool,
}

impl CircuitPermit {
    /// Whether this request is the half-open trial.
    #[must_use]
    pub fn is_trial(&self) -> bool {
        self.trial
    }

    /// The service answered without throttling.
    pub fn succeed(mut self) {
        self.trial = false;
        lock_breaker(&self.circuit_breaker).record_success();
    }

    /// The request ended throttled, unavailable or without a response.
    ///
    /// Outside a trial this is a no-op; throttled responses are counted as
    /// they arrive.
    pub fn fail(mut self) {
        self.resolve_failed_trial();
    }

    fn resolve_failed_trial(&mut self) {
        if !std::mem::take(&mut self.trial) {
            return;
        }
        let opened = lock_breaker(&self.circuit_breaker).record_failure();
        if opened {
            // Counter only; a contended lock just skips it.
            if let Ok(mut metrics) = self.metrics.try_write() {
                metrics.record_circuit_open();
            }
        }
    }
}

impl Drop for CircuitPermit {
    fn drop(&mut self) {
        if self.trial {
            warn!("Circuit breaker trial ended without a response");
            self.resolve_failed_trial();
        }
    }
}

fn lock_breaker(breaker: &Mutex<CircuitBreaker>) -> std::sync::MutexGuard<'_, CircuitBreaker> {
    breaker.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::build(RateLimitConfig::default())
    }
}

impl RateLimiter {
    /// Creates a rate limiter after validating `config`.
    pub fn new(config: RateLimitConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RateLimitConfig) -> Self {
        let circuit_breaker = CircuitBreaker::new(
            config.circuit_failure_threshold,
            Duration::from_secs(config.circuit_failure_window_secs),
            Duration::from_secs(config.circuit_open_duration_secs),
        );
        Self {
            config,
            circuit_breaker: Arc::new(Mutex::new(circuit_breaker)),
            metrics: Arc::new(RwLock::new(RateLimitMetrics::default())),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Statuses the adapter retries.
    #[must_use]
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 503 | 504)
    }

    /// Combines the adapter configuration with a per-request option.
    #[must_use]
    pub fn budget(&self, option: Option<&RetryHandlerOption>) -> RetryBudget {
        match option {
            Some(option) if !option.enabled => RetryBudget {
                max_retries: 0,
                base_delay: Duration::from_millis(self.config.base_delay_ms),
            },
            Some(option) => RetryBudget {
                max_retries: option.max_retries,
                base_delay: option.delay,
            },
            None => RetryBudget {
                max_retries: self.config.max_retries,
                base_delay: Duration::from_millis(self.config.base_delay_ms),
            },
        }
    }

    /// Parses `Retry-After` given as delta seconds or as an HTTP-date.
    #[must_use]
    pub fn parse_retry_after(header_value: &str) -> Option<Duration> {
        Self::parse_retry_after_at(header_value, Utc::now())
    }

    fn parse_retry_after_at(header_value: &str, now: DateTime<Utc>) -> Option<Duration> {
        let value = header_value.trim();
        if let Ok(seconds) = value.parse::<u64>() {
            return Some(Duration::from_secs(seconds));
        }
        let at = DateTime::parse_from_rfc2822(value).ok()?.with_timezone(&Utc);
        Some((at - now).to_std().unwrap_or(Duration::ZERO))
    }

    /// Exponential delay `base * 2^attempt`, capped at `max_delay_ms`.
    #[must_use]
    pub fn backoff_delay(&self, base: Duration, attempt: u32) -> Duration {
        let factor = 2_u32.saturating_pow(attempt);
        let max = Duration::from_millis(self.config.max_delay_ms);
        base.saturating_mul(factor).min(max)
    }

    /// Adds up to `jitter_factor` of random extra delay.
    #[must_use]
    pub fn add_jitter(&self, delay: Duration) -> Duration {
        if self.config.jitter_factor <= 0.0 || delay.is_zero() {
            return delay;
        }
        let jitter_range = delay.as_secs_f64() * self.config.jitter_factor;
        let jitter = rand::thread_rng().gen_range(0.0..=jitter_range);
        delay + Duration::from_secs_f64(jitter)
    }

    /// Delay before retry number `attempt` (zero based).
    #[must_use]
    pub fn retry_delay(&self, retry_after: Option<&str>, budget: &RetryBudget, attempt: u32) -> Duration {
        let max = Duration::from_millis(self.config.max_delay_ms);
        match retry_after.and_then(Self::parse_retry_after) {
            Some(delay) if delay > max => {
                warn!(?delay, ?max, "Retry-After exceeds maximum delay, capping");
                max
            }
            Some(delay) => delay,
            None => self.add_jitter(self.backoff_delay(budget.base_delay, attempt)),
        }
    }

    /// Fails fast while the circuit is open; otherwise admits the request.
    pub async fn check_circuit(&self) -> GraphResult<CircuitPermit> {
        let admission = {
            let mut cb = lock_breaker(&self.circuit_breaker);
            cb.allow_request()
                .then(|| cb.state() == CircuitBreakerState::HalfOpen)
        };
        match admission {
            Some(trial) => {
                self.metrics.write().await.record_request();
                Ok(CircuitPermit {
                    circuit_breaker: Arc::clone(&self.circuit_breaker),
                    metrics: Arc::clone(&self.metrics),
                    trial,
                })
            }
            None => {
                self.metrics.write().await.record_circuit_reject();
                Err(GraphError::CircuitOpen)
            }
        }
    }

    /// Records a retryable response and waits before the next attempt.
    ///
    /// Returns `false` when the budget is spent or the circuit just opened;
    /// the caller then hands the response to error mapping.
    pub async fn handle_retryable_response(
        &self,
        status: u16,
        retry_after: Option<&str>,
        attempt: u32,
        budget: &RetryBudget,
    ) -> bool {
        self.metrics.write().await.record_retryable_status(status);

        if status == 429 {
            let opened = lock_breaker(&self.circuit_breaker).record_failure();
            if opened {
                self.metrics.write().await.record_circuit_open();
                return false;
            }
        }

        if attempt >= budget.max_retries {
            debug!(status, attempt, "Retry budget exhausted");
            return false;
        }

        let delay = self.retry_delay(retry_after, budget, attempt);
        info!(status, ?delay, attempt = attempt + 1, "Retrying request");
        tokio::time::sleep(delay).await;

        let mut metrics = self.metrics.write().await;
        metrics.record_retry(delay);
        metrics.record_request();
        true
    }

    pub async fn record_claims_challenge(&self) {
        let mut metrics = self.metrics.write().await;
        metrics.record_claims_challenge();
        metrics.record_request();
    }

    pub async fn circuit_state(&self) -> CircuitBreakerState {
        lock_breaker(&self.circuit_breaker).state()
    }

    /// Returns a snapshot of current metrics.
    pub async fn metrics(&self) -> RateLimitMetrics {
        let mut snapshot = self.metrics.read().await.clone();
        snapshot.circuit_state = lock_breaker(&self.circuit_breaker).state();
        snapshot
    }

    #[cfg(test)]
    pub(crate) fn expire_open_period(&self) {
        lock_breaker(&self.circuit_breaker).expire_open_period();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn limiter() -> RateLimiter {
        RateLimiter::new(RateLimitConfig::for_testing()).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = RateLimitConfig::default();
        assert_eq!(config.base_delay_ms, 1000);
        assert_eq!(config.max_delay_ms, 180_000);
        assert_eq!(config.max_retries, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = RateLimitConfig::default();
        config.base_delay_ms = 0;
        assert!(config.validate().is_err());

        config.base_delay_ms = 1000;
        config.max_delay_ms = 500;
        assert!(config.validate().is_err());

        config.max_delay_ms = 180_000;
        config.jitter_factor = 1.5;
        assert!(config.validate().is_err());
        assert!(RateLimiter::new(config).is_err());
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(RateLimiter::is_retryable_status(429));
        assert!(RateLimiter::is_retryable_status(503));
        assert!(RateLimiter::is_retryable_status(504));
        assert!(!RateLimiter::is_retryable_status(500));
        assert!(!RateLimiter::is_retryable_status(401));
    }

    #[test]
    fn test_parse_retry_after_seconds() {
        assert_eq!(RateLimiter::parse_retry_after("60"), Some(Duration::from_secs(60)));
        assert_eq!(RateLimiter::parse_retry_after(" 2 "), Some(Duration::from_secs(2)));
        assert_eq!(RateLimiter::parse_retry_after("soon"), None);
        assert_eq!(RateLimiter::parse_retry_after(""), None);
    }

    #[test]
    fn test_parse_retry_after_http_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            RateLimiter::parse_retry_after_at("Fri, 01 Mar 2024 12:00:30 GMT", now),
            Some(Duration::from_secs(30))
        );
        assert_eq!(
            RateLimiter::parse_retry_after_at("Fri, 01 Mar 2024 11:00:00 GMT", now),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_backoff_is_capped() {
        let limiter = limiter();
        let base = Duration::from_millis(10);
        assert_eq!(limiter.backoff_delay(base, 0), Duration::from_millis(10));
        assert_eq!(limiter.backoff_delay(base, 2), Duration::from_millis(40));
        assert_eq!(limiter.backoff_delay(base, 10), Duration::from_millis(100));
        assert_eq!(limiter.backoff_delay(base, 40), Duration::from_millis(100));
    }

    #[test]
    fn test_jitter_bounds() {
        let config = RateLimitConfig {
            jitter_factor: 0.5,
            ..RateLimitConfig::for_testing()
        };
        let limiter = RateLimiter::new(config).unwrap();
        for _ in 0..50 {
            let delay = limiter.add_jitter(Duration::from_millis(100));
            assert!(delay >= Duration::from_millis(100));
            assert!(delay <= Duration::from_millis(150));
        }
    }

    #[test]
    fn test_retry_after_capped_at_max() {
        let limiter = limiter();
        let budget = limiter.budget(None);
        assert_eq!(
            limiter.retry_delay(Some("3600"), &budget, 0),
            Duration::from_millis(100)
        );
    }

    #[test]
    fn test_budget_from_option() {
        let limiter = limiter();
        assert_eq!(limiter.budget(None).max_retries, 3);

        let option = RetryHandlerOption {
            max_retries: 1,
            delay: Duration::from_millis(5),
            enabled: true,
        };
        let budget = limiter.budget(Some(&option));
        assert_eq!(budget.max_retries, 1);
        assert_eq!(budget.base_delay, Duration::from_millis(5));

        assert_eq!(limiter.budget(Some(&RetryHandlerOption::disabled())).max_retries, 0);
    }

    #[tokio::test]
    async fn test_handle_retryable_until_budget_spent() {
        let limiter = limiter();
        let budget = limiter.budget(None);

        assert!(limiter.handle_retryable_response(503, Some("0"), 0, &budget).await);
        assert!(limiter.handle_retryable_response(503, None, 1, &budget).await);
        assert!(limiter.handle_retryable_response(503, None, 2, &budget).await);
        assert!(!limiter.handle_retryable_response(503, None, 3, &budget).await);

        let metrics = limiter.metrics().await;
        assert_eq!(metrics.unavailable_responses, 4);
        assert_eq!(metrics.retries, 3);
    }

    #[tokio::test]
    async fn test_sustained_throttling_opens_circuit() {
        let limiter = limiter();
        let budget = RetryBudget {
            max_retries: 100,
            base_delay: Duration::from_millis(1),
        };

        for attempt in 0..4 {
            assert!(limiter.handle_retryable_response(429, Some("0"), attempt, &budget).await);
        }
        assert!(!limiter.handle_retryable_response(429, Some("0"), 4, &budget).await);
        assert_eq!(limiter.circuit_state().await, CircuitBreakerState::Open);
        assert!(matches!(limiter.check_circuit().await, Err(GraphError::CircuitOpen)));

        let metrics = limiter.metrics().await;
        assert_eq!(metrics.circuit_opens, 1);
        assert_eq!(metrics.circuit_rejects, 1);
        assert_eq!(metrics.throttled_responses, 5);
    }

    #[tokio::test]
    async fn test_success_closes_circuit_state() {
        let limiter = limiter();
        let permit = limiter.check_circuit().await.unwrap();
        assert!(!permit.is_trial());
        permit.succeed();
        assert_eq!(limiter.circuit_state().await, CircuitBreakerState::Closed);
        assert_eq!(limiter.metrics().await.total_requests, 1);
    }

    async fn open_circuit(limiter: &RateLimiter) {
        let budget = RetryBudget {
            max_retries: 100,
            base_delay: Duration::from_millis(1),
        };
        for attempt in 0..5 {
            limiter.handle_retryable_response(429, Some("0"), attempt, &budget).await;
        }
        assert_eq!(limiter.circuit_state().await, CircuitBreakerState::Open);
        limiter.expire_open_period();
    }

    #[tokio::test]
    async fn test_dropped_trial_reopens_then_recovers() {
        let limiter = limiter();
        open_circuit(&limiter).await;

        let trial = limiter.check_circuit().await.unwrap();
        assert!(trial.is_trial());
        assert!(matches!(limiter.check_circuit().await, Err(GraphError::CircuitOpen)));
        drop(trial);
        assert_eq!(limiter.circuit_state().await, CircuitBreakerState::Open);

        limiter.expire_open_period();
        let trial = limiter.check_circuit().await.unwrap();
        assert!(trial.is_trial());
        trial.succeed();
        assert_eq!(limiter.circuit_state().await, CircuitBreakerState::Closed);
        assert!(limiter.check_circuit().await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_trial_reopens() {
        let limiter = limiter();
        open_circuit(&limiter).await;

        let trial = limiter.check_circuit().await.unwrap();
        trial.fail();
        assert_eq!(limiter.circuit_state().await, CircuitBreakerState::Open);
        assert_eq!(limiter.metrics().await.circuit_opens, 2);
    }

    #[tokio::test]
    async fn test_closed_permit_drop_counts_nothing() {
        let limiter = limiter();
        drop(limiter.check_circuit().await.unwrap());
        limiter.check_circuit().await.unwrap().fail();
        assert_eq!(limiter.circuit_state().await, CircuitBreakerState::Closed);
    }
}
