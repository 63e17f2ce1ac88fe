use crate::error::AppError;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Per-key fixed-window request counter.
///
/// Windows are tracked lazily: a key's window resets on the first
/// request after it expires, so idle keys cost nothing.
struct Window {
    started: Instant,
    count: u32,
}

pub struct RateLimiter {
    // Maps unique keys e.g. "account_id:endpoint" to the current window
    windows: DashMap<String, Window>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            windows: DashMap::new(),
        }
    }

    /// Allow up to `limit` requests per `per` window for `key`.
    pub fn check(&self, key: &str, limit: u32, per: Duration) -> Result<(), AppError> {
        let now = Instant::now();
        let mut window = self.windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(window.started) >= per {
            window.started = now;
            window.count = 0;
        }

        if window.count < limit {
            window.count += 1;
            Ok(())
        } else {
            Err(AppError::RateLimitExceeded(format!("Rate limit for {}", key)))
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
