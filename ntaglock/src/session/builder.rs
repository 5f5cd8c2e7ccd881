// ntaglock/src/session/builder.rs

use crate::collab::{Haptic, NoHaptic};
use crate::retry::{Pacer, RetryPolicy, ThreadPacer};
use crate::session::{AuthorizationSession, EventSink, SessionConfig};
use crate::types::{PageAddress, Password};
use crate::{Error, Result};

/// Helper to construct an AuthorizationSession with optional configuration.
pub struct SessionBuilder<P = ThreadPacer, H = NoHaptic> {
    config: SessionConfig,
    pacer: P,
    haptic: H,
    events: Option<Box<dyn EventSink + Send>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            pacer: ThreadPacer,
            haptic: NoHaptic,
            events: None,
        }
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Pacer, H: Haptic> SessionBuilder<P, H> {
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn password(mut self, password: Password) -> Self {
        self.config.password = password;
        self
    }

    pub fn read_window(mut self, start: PageAddress, end: PageAddress) -> Self {
        self.config.read_start = start;
        self.config.read_end = end;
        self
    }

    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.config.retry = policy;
        self
    }

    pub fn sram_verify(mut self, enabled: bool) -> Self {
        self.config.sram_verify = enabled;
        self
    }

    pub fn haptic_ms(mut self, ms: u64) -> Self {
        self.config.haptic_ms = ms;
        self
    }

    /// Replace the pacer (e.g. a RecordingPacer in tests).
    pub fn pacer<P2: Pacer>(self, pacer: P2) -> SessionBuilder<P2, H> {
        SessionBuilder {
            config: self.config,
            pacer,
            haptic: self.haptic,
            events: self.events,
        }
    }

    pub fn haptic<H2: Haptic>(self, haptic: H2) -> SessionBuilder<P, H2> {
        SessionBuilder {
            config: self.config,
            pacer: self.pacer,
            haptic,
            events: self.events,
        }
    }

    pub fn events(mut self, sink: impl EventSink + Send + 'static) -> Self {
        self.events = Some(Box::new(sink));
        self
    }

    /// Validate the configuration and build the session.
    pub fn build(self) -> Result<AuthorizationSession<P, H>> {
        let c = &self.config;
        if c.read_start > c.read_end {
            return Err(Error::Precondition(format!(
                "read window is inverted: {}..{}",
                c.read_start, c.read_end
            )));
        }
        if c.retry.max_attempts == 0 {
            return Err(Error::Precondition("max_attempts must be at least 1".into()));
        }
        if c.sram_verify && c.sram_verify_start.offset(3).is_none() {
            return Err(Error::Precondition(format!(
                "SRAM window at {} runs past 0xFF",
                c.sram_verify_start
            )));
        }
        Ok(AuthorizationSession::with_parts(
            self.config,
            self.pacer,
            self.haptic,
            self.events,
        ))
    }
}
