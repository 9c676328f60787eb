//! Port for the simulated network delay in front of every load.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the current task for a while.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LatencySleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
