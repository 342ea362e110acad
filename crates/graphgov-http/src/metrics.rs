//! Counters kept by the rate limiter.

use std::time::{Duration, Instant};

use crate::circuit_breaker::CircuitBreakerState;

/// Snapshot of retry and throttling activity.
#[derive(Debug, Clone)]
pub struct RateLimitMetrics {
    /// Requests sent, retries included.
    pub total_requests: u64,
    /// `429 Too Many Requests` responses.
    pub throttled_responses: u64,
    /// `503`/`504` responses.
    pub unavailable_responses: u64,
    pub retries: u64,
    pub circuit_opens: u64,
    pub circuit_rejects: u64,
    /// Retries triggered by a claims challenge.
    pub claims_challenges: u64,
    pub circuit_state: CircuitBreakerState,
    total_retry_delay: Duration,
    last_throttled_at: Option<Instant>,
}

impl Default for RateLimitMetrics {
    fn default() -> Self {
        Self {
            total_requests: 0,
            throttled_responses: 0,
            unavailable_responses: 0,
            retries: 0,
            circuit_opens: 0,
            circuit_rejects: 0,
            claims_challenges: 0,
            circuit_state: CircuitBreakerState::Closed,
            total_retry_delay: Duration::ZERO,
            last_throttled_at: None,
        }
    }
}

impl RateLimitMetrics {
    pub fn record_request(&mut self) {
        self.total_requests += 1;
    }

    pub fn record_retryable_status(&mut self, status: u16) {
        if status == 429 {
            self.throttled_responses += 1;
            self.last_throttled_at = Some(Instant::now());
        } else {
            self.unavailable_responses += 1;
        }
    }

    pub fn record_retry(&mut self, delay: Duration) {
        self.retries += 1;
        self.total_retry_delay += delay;
    }

    pub fn record_circuit_open(&mut self) {
        self.circuit_opens += 1;
    }

    pub fn record_circuit_reject(&mut self) {
        self.circuit_rejects += 1;
    }

    pub fn record_claims_challenge(&mut self) {
        self.claims_challenges += 1;
    }

    #[must_use]
    pub fn average_retry_delay(&self) -> Duration {
        match u32::try_from(self.retries) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(retries) => self.total_retry_delay / retries,
        }
    }

    /// Share of requests answered with 429.
    #[must_use]
    pub fn throttle_ratio(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.throttled_responses as f64 / self.total_requests as f64
        }
    }

    #[must_use]
    pub fn time_since_last_throttle(&self) -> Option<Duration> {
        self.last_throttled_at.map(|at| at.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let metrics = RateLimitMetrics::default();
        assert_eq!(metrics.total_requests, 0);
        assert_eq!(metrics.circuit_state, CircuitBreakerState::Closed);
        assert_eq!(metrics.average_retry_delay(), Duration::ZERO);
        assert_eq!(metrics.throttle_ratio(), 0.0);
        assert!(metrics.time_since_last_throttle().is_none());
    }

    #[test]
    fn test_status_classification() {
        let mut metrics = RateLimitMetrics::default();
        metrics.record_retryable_status(429);
        metrics.record_retryable_status(503);
        metrics.record_retryable_status(504);

        assert_eq!(metrics.throttled_responses, 1);
        assert_eq!(metrics.unavailable_responses, 2);
        assert!(metrics.time_since_last_throttle().is_some());
    }

    #[test]
    fn test_averages() {
        let mut metrics = RateLimitMetrics::default();
        for _ in 0..4 {
            metrics.record_request();
        }
        metrics.record_retryable_status(429);
        metrics.record_retry(Duration::from_millis(100));
        metrics.record_retry(Duration::from_millis(300));

        assert_eq!(metrics.average_retry_delay(), Duration::from_millis(200));
        assert!((metrics.throttle_ratio() - 0.25).abs() < f64::EPSILON);
    }
}
