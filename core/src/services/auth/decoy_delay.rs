//! Decoy delay service equalizing response latency for absent accounts
//!
//! Looking up a nonexistent login returns without any hash derivation,
//! which would otherwise answer measurably faster than a wrong-password
//! attempt and allow username enumeration via timing. This service
//! applies a fixed response-time floor to the absent case as a per-call
//! async sleep; concurrent requests are never throttled by it.

use std::time::Duration;
use tracing::debug;

/// Configuration for the decoy delay service
#[derive(Debug, Clone)]
pub struct DecoyDelayConfig {
    /// Fixed delay in milliseconds applied to absent-account responses
    pub delay_ms: u64,
}

impl Default for DecoyDelayConfig {
    fn default() -> Self {
        Self { delay_ms: 100 }
    }
}

/// Service applying the decoy delay
pub struct DecoyDelayService {
    config: DecoyDelayConfig,
}

impl DecoyDelayService {
    /// Create a new decoy delay service with configuration
    pub fn new(config: DecoyDelayConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(DecoyDelayConfig::default())
    }

    /// The configured delay
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.config.delay_ms)
    }

    /// Apply the delay asynchronously for the current call only
    pub async fn apply(&self) {
        let delay = self.delay();

        if delay.as_millis() > 0 {
            debug!(
                delay_ms = delay.as_millis() as u64,
                "Applying decoy delay for absent account"
            );
            tokio::time::sleep(delay).await;
        }
    }
}
