//! Fail-fast guard for sustained throttling.
//!
//! Three states: `Closed` passes requests, `Open` rejects them until the open
//! period elapses, `HalfOpen` lets exactly one trial through and closes or
//! re-opens depending on how the trial fares.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitBreakerState {
    Closed,
    Open,
    HalfOpen,
}

impl fmt::Display for CircuitBreakerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Closed => "closed",
            Self::Open => "open",
            Self::HalfOpen => "half-open",
        };
        f.write_str(name)
    }
}

/// Tracks throttled responses and decides whether new requests may start.
#[derive(Debug)]
pub struct CircuitBreaker {
    state: CircuitBreakerState,
    failures: u32,
    window_started: Option<Instant>,
    opened_at: Option<Instant>,
    trial_in_flight: bool,
    failure_threshold: u32,
    failure_window: Duration,
    open_duration: Duration,
}

impl CircuitBreaker {
    /// Opens after `failure_threshold` failures inside `failure_window` and
    /// stays open for `open_duration`.
    #[must_use]
    pub fn new(failure_threshold: u32, failure_window: Duration, open_duration: Duration) -> Self {
        Self {
            state: CircuitBreakerState::Closed,
            failures: 0,
            window_started: None,
            opened_at: None,
            trial_in_flight: false,
            failure_threshold: failure_threshold.max(1),
            failure_window,
            open_duration,
        }
    }

    #[must_use]
    pub fn state(&self) -> CircuitBreakerState {
        self.state
    }

    #[must_use]
    pub fn failure_count(&self) -> u32 {
        self.failures
    }

    /// Returns `true` if a request may be sent now.
    pub fn allow_request(&mut self) -> bool {
        match self.state {
            CircuitBreakerState::Closed => true,
            CircuitBreakerState::Open => {
                let elapsed = self.opened_at.map_or(self.open_duration, |at| at.elapsed());
                if elapsed < self.open_duration {
                    debug!(remaining = ?(self.open_duration - elapsed), "Circuit open, rejecting request");
                    return false;
                }
                self.state = CircuitBreakerState::HalfOpen;
                self.trial_in_flight = true;
                debug!("Circuit half-open, sending trial request");
                true
            }
            CircuitBreakerState::HalfOpen => {
                if self.trial_in_flight {
                    false
                } else {
                    self.trial_in_flight = true;
                    true
                }
            }
        }
    }

    /// Records a throttled response or a failed trial. Returns `true` if this
    /// opened the circuit.
    pub fn record_failure(&mut self) -> bool {
        match self.state {
            CircuitBreakerState::Closed => {
                let now = Instant::now();
                let window_expired = self
                    .window_started
                    .map_or(true, |start| now.duration_since(start) > self.failure_window);
                if window_expired {
                    self.window_started = Some(now);
                    self.failures = 0;
                }
                self.failures += 1;

                if self.failures >= self.failure_threshold {
                    warn!(failures = self.failures, "Circuit breaker opened");
                    self.open();
                    return true;
                }
                false
            }
            CircuitBreakerState::HalfOpen => {
                warn!("Circuit breaker trial failed, re-opening");
                self.open();
                true
            }
            CircuitBreakerState::Open => false,
        }
    }

    /// Records a response that was not throttled.
    pub fn record_success(&mut self) {
        if self.state == CircuitBreakerState::HalfOpen {
            info!("Circuit breaker closed after successful trial");
        }
        self.state = CircuitBreakerState::Closed;
        self.failures = 0;
        self.window_started = None;
        self.opened_at = None;
        self.trial_in_flight = false;
    }

    fn open(&mut self) {
        self.state = CircuitBreakerState::Open;
        self.opened_at = Some(Instant::now());
        self.trial_in_flight = false;
    }

    #[cfg(test)]
    pub(crate) fn expire_open_period(&mut self) {
        if let Some(at) = self.opened_at {
            self.opened_at = at.checked_sub(self.open_duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaker() -> CircuitBreaker {
        CircuitBreaker::new(3, Duration::from_secs(60), Duration::from_secs(30))
    }

    #[test]
    fn test_starts_closed() {
        let mut cb = breaker();
        assert_eq!(cb.state(), CircuitBreakerState::Closed);
        assert!(cb.allow_request());
    }

    #[test]
    fn test_opens_at_threshold() {
        let mut cb = breaker();
        assert!(!cb.record_failure());
        assert!(!cb.record_failure());
        assert!(cb.record_failure());
        assert_eq!(cb.state(), CircuitBreakerState::Open);
        assert!(!cb.allow_request());
    }

    #[test]
    fn test_success_resets_failures() {
        let mut cb = breaker();
        cb.record_failure();
        cb.record_failure();
        cb.record_success();
        assert_eq!(cb.failure_count(), 0);
        assert!(!cb.record_failure());
    }

    #[test]
    fn test_half_open_allows_single_trial() {
        let mut cb = breaker();
        for _ in 0..3 {
            cb.record_failure();
        }
        cb.expire_open_period();

        assert!(cb.allow_request());
        assert_eq!(cb.state(), CircuitBreakerState::HalfOpen);
        assert!(!cb.allow_request());

        cb.record_success();
        assert_eq!(cb.state(), CircuitBreakerState::Closed);
        assert!(cb.allow_request());
    }

    #[test]
    fn test_failed_trial_reopens() {
        let mut cb = breaker();
        for _ in 0..3 {
            cb.record_failure();
        }
        cb.expire_open_period();
        assert!(cb.allow_request());

        assert!(cb.record_failure());
        assert_eq!(cb.state(), CircuitBreakerState::Open);
        assert!(!cb.allow_request());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(CircuitBreakerState::HalfOpen.to_string(), "half-open");
    }
}
