use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

/// Enforces a minimum interval between outbound Entrez requests.
///
/// The whole process shares one request budget, so a single limiter is
/// shared (`Arc`) into every gateway. The timestamp mutex is held across
/// the sleep: concurrent callers queue up and each observes the spacing
/// left by the previous caller rather than a stale timestamp.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub(crate) fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Returns once at least `min_interval` has elapsed since the previous
    /// `acquire` returned. The first call never waits.
    pub(crate) async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let target = previous + self.min_interval;
            if target > Instant::now() {
                sleep_until(target).await;
            }
        }
        *last = Some(Instant::now());
    }
}
