use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};

/// Client-side request budget, e.g. the five-calls-per-minute free plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub quota_window: Duration,
    pub quota_limit: u32,
}

impl RateLimitPolicy {
    pub const fn new(quota_window: Duration, quota_limit: u32) -> Self {
        Self {
            quota_window,
            quota_limit,
        }
    }

    pub const fn free_tier() -> Self {
        Self::new(Duration::from_secs(60), 5)
    }

    pub const fn per_second(quota_limit: u32) -> Self {
        Self::new(Duration::from_secs(1), quota_limit)
    }

    fn quota(self) -> Quota {
        let safe_limit = NonZeroU32::new(self.quota_limit).unwrap_or(NonZeroU32::MIN);
        let seconds_per_cell =
            (self.quota_window.as_secs_f64() / f64::from(safe_limit.get())).max(0.001);

        Quota::with_period(Duration::from_secs_f64(seconds_per_cell))
            .unwrap_or_else(|| Quota::per_second(safe_limit))
            .allow_burst(safe_limit)
    }
}

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Shared limiter consulted before every upstream attempt.
#[derive(Clone)]
pub struct RequestThrottle {
    limiter: Arc<DirectRateLimiter>,
    policy: RateLimitPolicy,
}

impl RequestThrottle {
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::direct(policy.quota())),
            policy,
        }
    }

    pub const fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// Takes one cell of budget if available without waiting.
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }

    /// Waits until one cell of budget is available.
    pub async fn acquire(&self) {
        if self.try_acquire() {
            return;
        }
        tracing::debug!(
            quota_limit = self.policy.quota_limit,
            window_ms = self.policy.quota_window.as_millis() as u64,
            "request budget exhausted; waiting for throttle"
        );
        self.limiter.until_ready().await;
    }
}

impl std::fmt::Debug for RequestThrottle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestThrottle")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_tier_allows_a_burst_of_five() {
        let throttle = RequestThrottle::new(RateLimitPolicy::free_tier());

        for _ in 0..5 {
            assert!(throttle.try_acquire());
        }
        assert!(!throttle.try_acquire());
    }

    #[test]
    fn zero_limit_is_treated_as_one() {
        let throttle = RequestThrottle::new(RateLimitPolicy::new(Duration::from_secs(60), 0));

        assert!(throttle.try_acquire());
        assert!(!throttle.try_acquire());
    }

    #[tokio::test]
    async fn acquire_returns_immediately_with_budget() {
        let throttle = RequestThrottle::new(RateLimitPolicy::per_second(100));
        tokio::time::timeout(Duration::from_millis(500), throttle.acquire())
            .await
            .expect("budget available");
    }
}
