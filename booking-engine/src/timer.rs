use std::time::{Duration, Instant};

/// A fixed-duration wait, polled by its owner. Both simulated latencies in
/// the view (initial load, payment) are a `Delay`; dropping the value
/// cancels the pending completion, so a torn-down view never applies a
/// stale state update. A real network call can replace the `Delay` without
/// changing how completion is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    started_at: Instant,
    fires_at: Instant,
}

impl Delay {
    pub fn after(duration: Duration) -> Self {
        let started_at = Instant::now();
        Self {
            started_at,
            fires_at: started_at + duration,
        }
    }

    pub fn is_ready(&self) -> bool {
        Instant::now() >= self.fires_at
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn remaining(&self) -> Duration {
        self.fires_at.saturating_duration_since(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_is_immediately_ready() {
        let delay = Delay::after(Duration::ZERO);
        assert!(delay.is_ready());
        assert_eq!(delay.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_long_delay_is_pending() {
        let delay = Delay::after(Duration::from_secs(3600));
        assert!(!delay.is_ready());
        assert!(delay.remaining() > Duration::from_secs(3500));
        assert!(delay.elapsed() < Duration::from_secs(1));
    }
}
