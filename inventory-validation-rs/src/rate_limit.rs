//! Login attempt rate limiting
//!
//! A [`RateLimiter`] counts attempts per key (typically a username) and
//! denies further attempts once the limit is reached, until the lockout
//! window has passed since the last allowed attempt. It is an ordinary value:
//! callers own it or share it behind an `Arc`.

use log::warn;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::SecurityConfig;

#[derive(Debug, Clone, Copy)]
struct Attempts {
    count: u32,
    last_attempt: Instant,
}

/// Per-key attempt counter with a lockout window
#[derive(Debug)]
pub struct RateLimiter {
    max_attempts: u32,
    lockout: Duration,
    attempts: Mutex<HashMap<String, Attempts>>,
}

impl RateLimiter {
    pub fn new(max_attempts: u32, lockout: Duration) -> Self {
        Self {
            max_attempts,
            lockout,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Limiter using the login limits of a security config
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self::new(config.max_login_attempts, config.lockout_duration())
    }

    /// Record an attempt for `key` now and report whether it may proceed
    pub fn is_allowed(&self, key: &str) -> bool {
        self.is_allowed_at(key, Instant::now())
    }

    /// Record an attempt for `key` at `now` and report whether it may proceed
    pub fn is_allowed_at(&self, key: &str, now: Instant) -> bool {
        let mut attempts = self.lock();

        let Some(entry) = attempts.get_mut(key) else {
            attempts.insert(
                key.to_string(),
                Attempts {
                    count: 1,
                    last_attempt: now,
                },
            );
            return true;
        };

        if now.saturating_duration_since(entry.last_attempt) > self.lockout {
            entry.count = 1;
            entry.last_attempt = now;
            return true;
        }

        if entry.count >= self.max_attempts {
            warn!("Rate limit reached for '{}' ({} attempts)", key, entry.count);
            return false;
        }

        entry.count += 1;
        entry.last_attempt = now;
        true
    }

    /// Forget every attempt recorded for `key`
    pub fn reset(&self, key: &str) {
        self.lock().remove(key);
    }

    /// Attempts currently counted for `key`
    pub fn attempts(&self, key: &str) -> u32 {
        self.lock().get(key).map(|a| a.count).unwrap_or(0)
    }

    // The map stays consistent even if a holder panicked
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Attempts>> {
        self.attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::from_config(&SecurityConfig::default())
    }
}
