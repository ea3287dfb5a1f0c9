// Per-requester request throttling

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Minimum spacing between accepted requests from one requester.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_secs(5);

/// Time source for the limiter. Swapped for a manual clock in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Tracks the last accepted request per requester identity and rejects
/// requests arriving within the configured interval. Entries are never
/// evicted, so the map grows with the number of distinct requesters.
pub struct RateLimiter {
    interval: Duration,
    clock: Box<dyn Clock>,
    last_accepted: Mutex<HashMap<u64, Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self::with_clock(interval, Box::new(SystemClock))
    }

    pub fn with_clock(interval: Duration, clock: Box<dyn Clock>) -> Self {
        Self {
            interval,
            clock,
            last_accepted: Mutex::new(HashMap::new()),
        }
    }

    /// Accept the request and record its timestamp, or reject it.
    /// A rejection leaves the stored timestamp untouched, so bursts do
    /// not push the window further out.
    pub fn allow(&self, requester: u64) -> bool {
        let now = self.clock.now();
        let mut last_accepted = self.last_accepted.lock().unwrap();

        match last_accepted.get(&requester) {
            Some(&last) if now.duration_since(last) <= self.interval => false,
            _ => {
                last_accepted.insert(requester, now);
                true
            }
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_INTERVAL)
    }
}
