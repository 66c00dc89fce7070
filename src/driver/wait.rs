use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::driver::error::UiError;

/// Polling parameters for every "wait until" call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaitConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl WaitConfig {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout_ms: timeout.as_millis() as u64,
            poll_interval_ms: poll_interval.as_millis() as u64,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Clamped to at least 1 ms.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

/// Poll `condition` until it returns true or the timeout elapses.
///
/// The condition is evaluated at least once, even with a zero timeout. Driver errors
/// abort the wait immediately. `locator` only labels the timeout error.
pub fn poll_until<F>(
    locator: &str,
    config: &WaitConfig,
    mut condition: F,
) -> Result<(), UiError>
where
    F: FnMut() -> Result<bool, UiError>,
{
    let start = Instant::now();
    let deadline = start + config.timeout();

    loop {
        if condition()? {
            let elapsed_ms = start.elapsed().as_millis() as u64;
            tracing::debug!(locator, elapsed_ms, "condition met");
            return Ok(());
        }

        let now = Instant::now();
        if now >= deadline {
            let waited_ms = start.elapsed().as_millis();
            tracing::debug!(locator, waited_ms = waited_ms as u64, "wait timed out");
            return Err(UiError::Timeout {
                locator: locator.to_string(),
                waited_ms,
            });
        }

        thread::sleep(config.poll_interval().min(deadline - now));
    }
}
