//! Fixed-interval rate gate for backend calls
//!
//! The source system respected its API rate limit with a fixed delay between
//! sequential calls. The gate makes that budget explicit and owned by the
//! backend, so callers stay correct whether chunks are processed
//! sequentially or from multiple worker threads.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Enforces a minimum interval between consecutive calls.
///
/// `wait` blocks the calling thread until the interval since the previous
/// admitted call has elapsed. Backends engage it on the blocking side of the
/// trait seam, before issuing the request.
#[derive(Debug)]
pub struct RateGate {
    min_interval: Duration,
    next_allowed: Mutex<Instant>,
}

impl RateGate {
    /// Create a gate with the given minimum interval between calls
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_allowed: Mutex::new(Instant::now()),
        }
    }

    /// The configured minimum interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Block until a call is admissible, then reserve the next slot
    pub fn wait(&self) {
        let wait_until = {
            let mut next = self.next_allowed.lock().unwrap();
            let admitted = (*next).max(Instant::now());
            *next = admitted + self.min_interval;
            admitted
        };

        let now = Instant::now();
        if wait_until > now {
            std::thread::sleep(wait_until - now);
        }
    }
}
