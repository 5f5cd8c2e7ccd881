// ntaglock/src/collab.rs
//! Host-side collaborators consumed by the protocol core.

use crate::types::Secret;

/// Persisted user secret. The core only reads it; the settings path of
/// the host application writes it.
pub trait SecretStore {
    fn get(&self) -> Option<Secret>;
    fn set(&mut self, secret: Secret);
    fn clear(&mut self);
}

/// Volatile store, enough for tests and hosts without secure storage.
#[derive(Debug, Default, Clone)]
pub struct MemorySecretStore {
    secret: Option<Secret>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(secret: Secret) -> Self {
        Self {
            secret: Some(secret),
        }
    }
}

impl SecretStore for MemorySecretStore {
    fn get(&self) -> Option<Secret> {
        self.secret.clone()
    }

    fn set(&mut self, secret: Secret) {
        self.secret = Some(secret);
    }

    fn clear(&mut self) {
        self.secret = None;
    }
}

/// Fire-and-forget vibration.
pub trait Haptic {
    fn buzz(&mut self, duration_ms: u64);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptic;

impl Haptic for NoHaptic {
    fn buzz(&mut self, _duration_ms: u64) {}
}

/// Remembers every pulse requested.
#[derive(Debug, Default, Clone)]
pub struct RecordingHaptic {
    pub pulses: Vec<u64>,
}

impl Haptic for RecordingHaptic {
    fn buzz(&mut self, duration_ms: u64) {
        self.pulses.push(duration_ms);
    }
}
