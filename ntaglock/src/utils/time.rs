//! Duration helpers for the retry and pacing configuration.

use std::time::Duration;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default inter-attempt delay of the retry controller.
pub fn default_inter_attempt_delay() -> Duration {
    ms(crate::constants::INTER_ATTEMPT_DELAY_MS)
}

/// Default field-coupling settle delay.
pub fn default_settle_delay() -> Duration {
    ms(crate::constants::SETTLE_DELAY_MS)
}
