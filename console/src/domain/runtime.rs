//! Time-related dependencies shared by the query and mutation services.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use super::ports::LatencySleeper;

/// Simulated network delay before every load or mutation.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(3_000);

/// How long a cached result is served without reloading.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(5 * 60);

/// Clock, sleeper and timing parameters for the services.
#[derive(Clone)]
pub struct QueryRuntime {
    /// Source of cache timestamps.
    pub clock: Arc<dyn Clock>,
    /// Awaits the simulated latency.
    pub sleeper: Arc<dyn LatencySleeper>,
    /// Simulated delay before every store read and write.
    pub latency: Duration,
    /// Age after which a cached result is reloaded.
    pub stale_time: Duration,
}

impl QueryRuntime {
    /// Production clock and sleeper with the given timings.
    pub fn with_timings(latency: Duration, stale_time: Duration) -> Self {
        Self {
            clock: Arc::new(DefaultClock),
            sleeper: Arc::new(TokioSleeper),
            latency,
            stale_time,
        }
    }
}

impl Default for QueryRuntime {
    fn default() -> Self {
        Self::with_timings(DEFAULT_LATENCY, DEFAULT_STALE_TIME)
    }
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl LatencySleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runtime_uses_console_timings() {
        let runtime = QueryRuntime::default();
        assert_eq!(runtime.latency, Duration::from_secs(3));
        assert_eq!(runtime.stale_time, Duration::from_secs(300));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_sleeper_waits_for_the_full_duration() {
        let started = tokio::time::Instant::now();
        TokioSleeper.sleep(Duration::from_millis(3_000)).await;
        assert!(started.elapsed() >= Duration::from_millis(3_000));
    }
}
