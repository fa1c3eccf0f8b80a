//! Simulated network latency.

use skillsphere_core::config::LatencyConfig;
use std::time::Duration;

/// Sleeps for the configured delay of each operation class.
///
/// With [`LatencyConfig::none`] every pause returns immediately without
/// touching the timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLatency {
    config: LatencyConfig,
}

impl SimulatedLatency {
    pub fn new(config: LatencyConfig) -> Self {
        Self { config }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub async fn read(&self) {
        pause(self.config.read()).await;
    }

    pub async fn list(&self) {
        pause(self.config.list()).await;
    }

    pub async fn write(&self) {
        pause(self.config.write()).await;
    }

    pub async fn auth(&self) {
        pause(self.config.auth()).await;
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_network_delays() {
        let latency = SimulatedLatency::new(LatencyConfig::simulated_network());
        let start = Instant::now();
        latency.write().await;
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test]
    async fn test_none_returns_immediately() {
        let latency = SimulatedLatency::none();
        let start = std::time::Instant::now();
        latency.list().await;
        latency.auth().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }
}
