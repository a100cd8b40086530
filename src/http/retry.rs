//! Retry and polling policies for HTTP requests.

use crate::error::HttpError;

use std::time::Duration;

/// Which retry behavior a request gets.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Single attempt. POSTs (Fusion+ orders, friendbot funding) and
    /// polled lookups use this.
    #[default]
    None,
    /// The client's idempotent config. Default for GET endpoints.
    Idempotent,
    /// Caller-supplied config for one request.
    Custom(RetryConfig),
}

/// Exponential backoff with optional jitter.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_factor: f64,
    /// Share of the delay randomized either way: `0.25` is ±25 %, `0.0` is none.
    pub jitter: f64,
    /// Statuses worth another attempt.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: 0.25,
            retryable_statuses: vec![502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Config for idempotent (GET) requests.
    ///
    /// The aggregator's free tier answers bursts with 429, so it is retried too.
    pub fn idempotent() -> Self {
        Self {
            retryable_statuses: vec![429, 502, 503, 504],
            ..Self::default()
        }
    }

    pub fn without_jitter(mut self) -> Self {
        self.jitter = 0.0;
        self
    }

    /// Whether `error` is transient under this config.
    pub fn should_retry(&self, error: &HttpError) -> bool {
        match error {
            HttpError::ServerError { status, .. } => self.retryable_statuses.contains(status),
            HttpError::RateLimited { .. } => self.retryable_statuses.contains(&429),
            HttpError::Timeout => true,
            HttpError::Reqwest(e) => {
                #[cfg(not(target_arch = "wasm32"))]
                let transient = e.is_connect() || e.is_timeout() || e.is_request();
                #[cfg(target_arch = "wasm32")]
                let transient = e.is_timeout() || e.is_request();
                transient
            }
            _ => false,
        }
    }

    /// Backoff before retry number `attempt + 1`.
    ///
    /// A server-provided `Retry-After` is honored when it asks for longer.
    pub fn delay_for(&self, attempt: u32, error: &HttpError) -> Duration {
        let backoff = self.delay_for_attempt(attempt);
        match error {
            HttpError::RateLimited {
                retry_after_ms: Some(ms),
            } => backoff.max(Duration::from_millis(*ms)),
            _ => backoff,
        }
    }

    /// Backoff for a 0-indexed attempt, capped at `max_delay`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let max = self.max_delay.as_secs_f64();
        let grown = self.initial_delay.as_secs_f64() * self.backoff_factor.powi(attempt as i32);
        let capped = if grown.is_finite() { grown.min(max) } else { max };

        let secs = if self.jitter > 0.0 {
            let spread = (rand::random::<f64>() * 2.0 - 1.0) * self.jitter;
            capped * (1.0 + spread)
        } else {
            capped
        };
        Duration::from_secs_f64(secs.max(0.0))
    }
}

/// Fixed-interval polling bounded by a total timeout.
///
/// Used to wait for a submitted ledger transaction to become final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
        }
    }
}

impl PollConfig {
    /// Upper bound on the number of checks this config allows.
    pub fn max_attempts(&self) -> u32 {
        if self.interval.is_zero() {
            return 1;
        }
        let n = self.timeout.as_millis() / self.interval.as_millis().max(1);
        (n as u32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults_to_single_attempt() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::None));
    }

    #[test]
    fn test_idempotent_retries_rate_limits() {
        let idempotent = RetryConfig::idempotent();
        let plain = RetryConfig::default();
        let limited = HttpError::RateLimited {
            retry_after_ms: None,
        };
        assert!(idempotent.should_retry(&limited));
        assert!(!plain.should_retry(&limited));

        let bad_gateway = HttpError::ServerError {
            status: 502,
            body: String::new(),
        };
        let internal = HttpError::ServerError {
            status: 500,
            body: String::new(),
        };
        assert!(plain.should_retry(&bad_gateway));
        assert!(!plain.should_retry(&internal));
        assert!(plain.should_retry(&HttpError::Timeout));
        assert!(!plain.should_retry(&HttpError::Unauthorized));
        assert!(!plain.should_retry(&HttpError::NotFound(String::new())));
    }

    #[test]
    fn test_backoff_doubles_without_jitter() {
        let config = RetryConfig {
            initial_delay: Duration::from_millis(100),
            ..RetryConfig::default()
        }
        .without_jitter();
        assert_eq!(config.delay_for_attempt(0).as_millis(), 100);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 200);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 400);
    }

    #[test]
    fn test_backoff_caps_at_max_delay() {
        let config = RetryConfig {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(2),
            backoff_factor: 10.0,
            ..RetryConfig::default()
        }
        .without_jitter();
        assert_eq!(config.delay_for_attempt(3), Duration::from_secs(2));
        assert_eq!(config.delay_for_attempt(500), Duration::from_secs(2));
    }

    #[test]
    fn test_jitter_stays_in_band() {
        let config = RetryConfig {
            initial_delay: Duration::from_millis(1000),
            ..RetryConfig::default()
        };
        for _ in 0..50 {
            let ms = config.delay_for_attempt(0).as_millis();
            assert!((750..=1250).contains(&ms), "{ms}");
        }
    }

    #[test]
    fn test_retry_after_wins_when_longer() {
        let config = RetryConfig::idempotent().without_jitter();
        let limited = HttpError::RateLimited {
            retry_after_ms: Some(3000),
        };
        assert_eq!(config.delay_for(0, &limited), Duration::from_secs(3));
        let short = HttpError::RateLimited {
            retry_after_ms: Some(10),
        };
        assert_eq!(config.delay_for(0, &short), Duration::from_millis(200));
    }

    #[test]
    fn test_poll_config_default_is_thirty_one_second_checks() {
        let poll = PollConfig::default();
        assert_eq!(poll.max_attempts(), 30);
    }

    #[test]
    fn test_poll_config_zero_interval_checks_once() {
        let poll = PollConfig {
            interval: Duration::ZERO,
            timeout: Duration::from_secs(5),
        };
        assert_eq!(poll.max_attempts(), 1);
    }
}
