// ntaglock/src/retry.rs
//! Bounded retry with fixed backoff, plus the mandatory settle pauses the
//! contactless link needs around certain commands.
//!
//! The two are separate knobs: `inter_attempt_delay` only runs between a
//! failed attempt and the next one, `settle_delay` runs wherever the caller
//! asks for it (after connect, before the first read attempt) and is never
//! counted as a retry.

use std::time::Duration;

use log::{trace, warn};

use crate::constants::DEFAULT_MAX_ATTEMPTS;
use crate::utils::{default_inter_attempt_delay, default_settle_delay};
use crate::{Error, Result};

/// Retry and pacing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub inter_attempt_delay: Duration,
    pub settle_delay: Duration,
}

impl RetryPolicy {
    pub fn new(
        max_attempts: u32,
        inter_attempt_delay: Duration,
        settle_delay: Duration,
    ) -> Result<Self> {
        if max_attempts == 0 {
            return Err(Error::Precondition("max_attempts must be at least 1".into()));
        }
        Ok(Self {
            max_attempts,
            inter_attempt_delay,
            settle_delay,
        })
    }

    /// Single attempt, no pauses. Useful for diagnostics and tests.
    pub fn once() -> Self {
        Self {
            max_attempts: 1,
            inter_attempt_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
        }
    }

    /// Field-coupling settle pause.
    pub fn settle(&self, pacer: &mut dyn Pacer) {
        if !self.settle_delay.is_zero() {
            trace!("settle {:?}", self.settle_delay);
            pacer.pause(self.settle_delay);
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            inter_attempt_delay: default_inter_attempt_delay(),
            settle_delay: default_settle_delay(),
        }
    }
}

/// Source of pauses. Every pause is a point where the protocol yields.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the current thread for each pause.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records pauses instead of sleeping.
#[derive(Debug, Default, Clone)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded pauses equal to `duration`.
    pub fn count(&self, duration: Duration) -> usize {
        self.pauses.iter().filter(|d| **d == duration).count()
    }

    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// Run `op` until it succeeds or `policy.max_attempts` is reached.
///
/// `op` receives the 1-based attempt number. Transient errors (transport,
/// timeout, framing) are followed by `inter_attempt_delay` and retried;
/// anything else is returned immediately. Exhaustion yields
/// `Error::RetriesExhausted` carrying the last error.
pub fn attempt<T, F>(policy: &RetryPolicy, pacer: &mut dyn Pacer, mut op: F) -> Result<T>
where
    F: FnMut(u32) -> Result<T>,
{
    let max = policy.max_attempts.max(1);
    let mut n = 1;
    loop {
        match op(n) {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_transient() => return Err(e),
            Err(e) if n >= max => {
                warn!("attempt {}/{} failed, giving up: {}", n, max, e);
                return Err(Error::RetriesExhausted {
                    attempts: n,
                    last: Box::new(e),
                });
            }
            Err(e) => {
                warn!("attempt {}/{} failed, retrying: {}", n, max, e);
                if !policy.inter_attempt_delay.is_zero() {
                    pacer.pause(policy.inter_attempt_delay);
                }
                n += 1;
            }
        }
    }
}
