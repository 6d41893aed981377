use std::time::Duration;

/// Simulated backend latency. A single fixed-duration suspension, no retry,
/// no cancellation: once a flow starts, its mutation applies when the delay
/// elapses. Injectable so tests run with zero delay.
#[derive(Debug, Clone, Copy)]
pub struct Latency(Duration);

impl Latency {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
