//! Simulated "thinking" pause before a response is delivered.

use std::time::Duration;

use async_trait::async_trait;
use medibot_core::config::ChatConfig;
use rand::Rng;

/// A pause awaited before each response.
///
/// Implementations must be cancel-safe: dropping the future abandons the
/// pause and nothing else.
#[async_trait]
pub trait ThinkingDelay: Send + Sync {
    /// Length of the next pause.
    fn next_duration(&self) -> Duration;

    async fn pause(&self) {
        let duration = self.next_duration();
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Uniformly random pause within `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct RandomDelay {
    min: Duration,
    max: Duration,
}

impl RandomDelay {
    /// Bounds are swapped if given in the wrong order.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms))
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }
}

impl Default for RandomDelay {
    fn default() -> Self {
        let defaults = ChatConfig::default();
        Self::from_millis(defaults.delay_min_ms, defaults.delay_max_ms)
    }
}

#[async_trait]
impl ThinkingDelay for RandomDelay {
    fn next_duration(&self) -> Duration {
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        Duration::from_millis(rand::rng().random_range(min..=max))
    }
}

/// No pause. Used by tests and the one-shot CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl ThinkingDelay for NoDelay {
    fn next_duration(&self) -> Duration {
        Duration::ZERO
    }
}

/// Build the delay policy described by the chat configuration.
pub fn from_config(config: &ChatConfig) -> Box<dyn ThinkingDelay> {
    if config.thinking_delay {
        Box::new(RandomDelay::from_millis(
            config.delay_min_ms,
            config.delay_max_ms,
        ))
    } else {
        Box::new(NoDelay)
    }
}
