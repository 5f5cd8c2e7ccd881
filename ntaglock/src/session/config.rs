// ntaglock/src/session/config.rs

use crate::constants::{AUTH_READ_END, AUTH_READ_START, DEFAULT_HAPTIC_MS, SRAM_VERIFY_START};
use crate::retry::RetryPolicy;
use crate::types::{PageAddress, Password};

/// Tunables of one authorization session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub password: Password,
    pub read_start: PageAddress,
    pub read_end: PageAddress,
    pub retry: RetryPolicy,
    /// Run the SRAM challenge/verify after the read. Off by default:
    /// evaluation then only checks that a secret is configured.
    pub sram_verify: bool,
    pub sram_verify_start: PageAddress,
    /// Vibration on success; 0 disables it
    pub haptic_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            password: Password::default(),
            read_start: PageAddress::new(AUTH_READ_START),
            read_end: PageAddress::new(AUTH_READ_END),
            retry: RetryPolicy::default(),
            sram_verify: false,
            sram_verify_start: PageAddress::new(SRAM_VERIFY_START),
            haptic_ms: DEFAULT_HAPTIC_MS,
        }
    }
}
