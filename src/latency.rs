use std::time::Duration;

use rand::Rng;

/// 模拟网络延迟 (base .. base + jitter)
///
/// Injectable delay source for the mock services. Each call suspends once for
/// a duration drawn uniformly from `[base, base + jitter)` and then resumes;
/// under `tokio::time::pause` the sleep auto-advances, so paused-clock tests
/// stay deterministic while still observing the ordering guarantee (no result
/// before the simulated delay elapses).
#[derive(Clone, Debug)]
pub struct Latency {
    base: Duration,
    jitter: Duration,
}

impl Latency {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    pub fn from_config(config: &crate::config::LatencyConfig) -> Self {
        Self::new(
            Duration::from_millis(config.base_ms),
            Duration::from_millis(config.jitter_ms),
        )
    }

    /// No delay at all; tests use this to exercise the services instantly.
    pub fn zero() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Same jitter, different base. Used for call sites with their own base
    /// delay, like the current-user lookup.
    pub fn with_base(&self, base: Duration) -> Self {
        Self::new(base, self.jitter)
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    pub async fn wait(&self) {
        let jitter_ms = self.jitter.as_millis() as u64;
        let extra = if jitter_ms == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(rand::thread_rng().gen_range(0..jitter_ms))
        };
        let delay = self.base + extra;
        tracing::trace!(delay_ms = delay.as_millis() as u64, "simulating latency");
        tokio::time::sleep(delay).await;
    }
}
