//! Keyed fixed-window rate limiter
//!
//! Coarse admission control for round-advance requests, keyed by an opaque
//! (actor, campaign) string. Windows are created lazily on first check and
//! purged once they are a full window past their reset time.
//!
//! This store is process-local: it assumes a single logical authority per
//! campaign. A horizontally scaled deployment must either pin campaigns to
//! instances or swap in a shared atomically-incremented store behind the same
//! `check_and_consume` signature.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitDecision {
    pub allowed: bool,
    /// Admissions left in the current window (0 when denied).
    pub remaining: u32,
    /// When the current window ends and the counter restarts.
    pub reset_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_time: DateTime<Utc>,
    length: Duration,
}

/// In-process sliding fixed-window rate limiter.
#[derive(Debug, Default)]
pub struct RateLimiter {
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and count one admission for `key` against `max` per `window`.
    pub fn check_and_consume(&self, key: &str, max: u32, window: Duration) -> RateLimitDecision {
        self.check_and_consume_at(key, max, window, Utc::now())
    }

    /// Clock-injected variant of [`check_and_consume`](Self::check_and_consume).
    pub fn check_and_consume_at(
        &self,
        key: &str,
        max: u32,
        window: Duration,
        now: DateTime<Utc>,
    ) -> RateLimitDecision {
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // A check at or past the reset time atomically starts a new window.
        let live = windows
            .get_mut(key)
            .filter(|state| now < state.reset_time)
            .map(|state| {
                state.count += 1;
                *state
            });
        let window_state = match live {
            Some(state) => state,
            None => {
                let fresh = Window {
                    count: 1,
                    reset_time: now + window,
                    length: window,
                };
                windows.insert(key.to_string(), fresh);
                fresh
            }
        };

        let allowed = window_state.count <= max;
        if !allowed {
            tracing::debug!(key, count = window_state.count, max, "rate limit exceeded");
        }

        RateLimitDecision {
            allowed,
            remaining: max.saturating_sub(window_state.count),
            reset_time: window_state.reset_time,
        }
    }

    /// Drop windows that are a full window length past their reset time.
    ///
    /// A window still inside `[reset_time, reset_time + length)` is kept: a
    /// concurrent check may be about to restart it.
    pub fn purge_stale(&self) {
        self.purge_stale_at(Utc::now());
    }

    /// Clock-injected variant of [`purge_stale`](Self::purge_stale).
    pub fn purge_stale_at(&self, now: DateTime<Utc>) {
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = windows.len();
        windows.retain(|_, state| now < state.reset_time + state.length);
        let purged = before - windows.len();
        if purged > 0 {
            tracing::debug!(purged, "purged stale rate limit windows");
        }
    }

    /// Number of tracked keys (stale entries included until purged).
    pub fn tracked_keys(&self) -> usize {
        self.windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_ms(ms: i64) -> Duration {
        Duration::milliseconds(ms)
    }

    #[test]
    fn test_first_three_allowed_fourth_denied() {
        let limiter = RateLimiter::new();
        let now = Utc::now();
        for i in 0..3 {
            let decision = limiter.check_and_consume_at("player:camp", 3, window_ms(1000), now);
            assert!(decision.allowed, "call {i} should be admitted");
            assert_eq!(decision.remaining, 2 - i);
        }
        let denied = limiter.check_and_consume_at("player:camp", 3, window_ms(1000), now);
        assert!(!denied.allowed);
        assert_eq!(denied.remaining, 0);
        assert_eq!(denied.reset_time, now + window_ms(1000));
    }

    #[test]
    fn test_window_resets_after_elapse() {
        let limiter = RateLimiter::new();
        let now = Utc::now();
        for _ in 0..4 {
            limiter.check_and_consume_at("k", 3, window_ms(1000), now);
        }
        let later = now + window_ms(1000);
        let decision = limiter.check_and_consume_at("k", 3, window_ms(1000), later);
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 2);
        assert_eq!(decision.reset_time, later + window_ms(1000));
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new();
        let now = Utc::now();
        let first = limiter.check_and_consume_at("a", 1, window_ms(1000), now);
        assert!(first.allowed);
        let denied = limiter.check_and_consume_at("a", 1, window_ms(1000), now);
        assert!(!denied.allowed);
        let other = limiter.check_and_consume_at("b", 1, window_ms(1000), now);
        assert!(other.allowed);
    }

    #[test]
    fn test_purge_keeps_live_windows() {
        let limiter = RateLimiter::new();
        let now = Utc::now();
        limiter.check_and_consume_at("live", 3, window_ms(10_000), now);
        limiter.check_and_consume_at("stale", 3, window_ms(1000), now);
        assert_eq!(limiter.tracked_keys(), 2);

        // "stale" is well past reset; "live" is mid-window.
        limiter.purge_stale_at(now + window_ms(2500));
        assert_eq!(limiter.tracked_keys(), 1);

        // The surviving window still enforces its count.
        let decision = limiter.check_and_consume_at("live", 3, window_ms(10_000), now);
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 1);
    }

    #[test]
    fn test_recently_expired_window_not_purged() {
        let limiter = RateLimiter::new();
        let now = Utc::now();
        limiter.check_and_consume_at("k", 3, window_ms(1000), now);
        // Past reset but not a full window past: still tracked.
        limiter.purge_stale_at(now + window_ms(1500));
        assert_eq!(limiter.tracked_keys(), 1);
        limiter.purge_stale_at(now + window_ms(2000));
        assert_eq!(limiter.tracked_keys(), 0);
    }
}
