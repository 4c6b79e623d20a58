use std::net::IpAddr;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Entries pruned once the map grows past this many client IPs.
const MAX_TRACKED_CLIENTS: usize = 10_000;

#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window per-IP request counter.
///
/// Per-process only: under a multi-instance deployment each instance
/// enforces its own quota. That is the documented behavior, not a bug.
pub struct RateLimiter {
    windows: DashMap<IpAddr, Window>,
    quota: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(quota: u32, window: Duration) -> Self {
        RateLimiter {
            windows: DashMap::new(),
            quota,
            window,
        }
    }

    /// Count one request against `ip`; false means over quota.
    pub fn allow(&self, ip: IpAddr) -> bool {
        if self.windows.len() > MAX_TRACKED_CLIENTS {
            self.windows.retain(|_, w| w.started.elapsed() < self.window);
        }

        let mut entry = self.windows.entry(ip).or_insert_with(|| Window {
            started: Instant::now(),
            count: 0,
        });

        if entry.started.elapsed() >= self.window {
            entry.started = Instant::now();
            entry.count = 0;
        }

        if entry.count >= self.quota {
            return false;
        }
        entry.count += 1;
        true
    }
}
