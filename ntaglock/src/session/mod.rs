// ntaglock/src/session/mod.rs
//! Authorization session: connect, authenticate, read, evaluate.
//!
//! One call to [`AuthorizationSession::run`] is one session run. It walks
//! `Idle -> Connecting -> Authenticating -> Reading -> Evaluating` and ends
//! in exactly one terminal state. The tag handle is closed on every exit
//! path before the outcome is reported.

mod builder;
mod config;
mod events;
mod sram;

pub use builder::SessionBuilder;
pub use config::SessionConfig;
pub use events::{EventLog, EventSink, SessionEvent, SessionState};
pub use sram::verify_secret_via_sram;

use log::{info, warn};

use crate::collab::{Haptic, NoHaptic, SecretStore};
use crate::error::ErrorKind;
use crate::protocol::{pages_to_bytes, Page};
use crate::retry::{self, Pacer, ThreadPacer};
use crate::tag::{TagHandle, TagSummary};
use crate::transport::TagTransport;
use crate::types::{Outcome, Verdict};
use crate::{Error, Result};

/// Everything a caller may want to show after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionReport {
    pub outcome: Outcome,
    pub tag: TagSummary,
    /// Pages read during the Reading step (empty if it never completed)
    pub pages: Vec<Page>,
    /// Read attempts actually made
    pub read_attempts: u32,
    pub error_kind: Option<ErrorKind>,
    pub error: Option<String>,
}

impl SessionReport {
    pub fn verdict(&self) -> Verdict {
        self.outcome.verdict()
    }

    /// Raw bytes of the pages read.
    pub fn data(&self) -> Vec<u8> {
        pages_to_bytes(&self.pages)
    }
}

struct Evaluation {
    outcome: Outcome,
    pages: Vec<Page>,
}

pub struct AuthorizationSession<P = ThreadPacer, H = NoHaptic> {
    config: SessionConfig,
    pacer: P,
    haptic: H,
    events: Option<Box<dyn EventSink + Send>>,
    state: SessionState,
}

impl AuthorizationSession {
    /// Session with default pacing (thread sleeps) and no haptics.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_parts(config, ThreadPacer, NoHaptic, None)
    }
}

impl<P: Pacer, H: Haptic> AuthorizationSession<P, H> {
    pub(crate) fn with_parts(
        config: SessionConfig,
        pacer: P,
        haptic: H,
        events: Option<Box<dyn EventSink + Send>>,
    ) -> Self {
        Self {
            config,
            pacer,
            haptic,
            events,
            state: SessionState::Idle,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn haptic(&self) -> &H {
        &self.haptic
    }

    /// Run one session against a tag that just entered the field.
    ///
    /// Never fails: connection, transport and framing problems end in
    /// `Outcome::TransportError`, which the user sees as a NAK. A secret
    /// rejected by the SRAM challenge (wrong length) ends in
    /// `Unauthorized`.
    pub fn run(&mut self, transport: &mut dyn TagTransport, store: &dyn SecretStore) -> SessionReport {
        self.state = SessionState::Idle;
        let tag = TagSummary::from_transport(transport);
        let mut read_attempts = 0u32;

        let result = self.drive(transport, store, &mut read_attempts);

        let (outcome, pages, error_kind, error) = match result {
            Ok(eval) => (eval.outcome, eval.pages, None, None),
            Err(e) => {
                warn!("session for {} failed: {}", tag.uid, e);
                let outcome = match e.kind() {
                    ErrorKind::Precondition => Outcome::Unauthorized,
                    _ => Outcome::TransportError,
                };
                (outcome, Vec::new(), Some(e.kind()), Some(e.to_string()))
            }
        };

        self.enter(SessionState::from(outcome));
        if outcome == Outcome::Authorized && self.config.haptic_ms > 0 {
            self.haptic.buzz(self.config.haptic_ms);
        }
        info!("session for {} finished: {} ({})", tag.uid, outcome, outcome.verdict());
        if let Some(sink) = self.events.as_mut() {
            sink.notify(SessionEvent::Finished(outcome));
        }

        SessionReport {
            outcome,
            tag,
            pages,
            read_attempts,
            error_kind,
            error,
        }
    }

    fn drive(
        &mut self,
        transport: &mut dyn TagTransport,
        store: &dyn SecretStore,
        read_attempts: &mut u32,
    ) -> Result<Evaluation> {
        let policy = self.config.retry;

        self.enter(SessionState::Connecting);
        policy.settle(&mut self.pacer);
        // Dropping the handle on any `?` below closes the connection.
        let mut handle = TagHandle::open(transport)?;
        policy.settle(&mut self.pacer);

        self.enter(SessionState::Authenticating);
        // The acknowledgement is not inspected; only a failed transceive
        // aborts the session.
        handle.authenticate(self.config.password)?;

        self.enter(SessionState::Reading);
        policy.settle(&mut self.pacer);
        let (start, end) = (self.config.read_start, self.config.read_end);
        let pages = retry::attempt(&policy, &mut self.pacer, |_| {
            *read_attempts += 1;
            let pages = handle.read_pages(start, end)?;
            if pages.is_empty() {
                return Err(Error::Framing {
                    expected: crate::constants::PAGE_SIZE,
                    actual: 0,
                });
            }
            Ok(pages)
        })?;

        self.enter(SessionState::Evaluating);
        // Presence of a configured secret gates the outcome; the page
        // data read above is not compared against it.
        let secret = store.get().filter(|s| !s.is_empty());
        let outcome = match secret {
            None => Outcome::Unauthorized,
            Some(secret) if self.config.sram_verify => {
                if verify_secret_via_sram(&mut handle, &secret, self.config.sram_verify_start)? {
                    Outcome::Authorized
                } else {
                    Outcome::Unauthorized
                }
            }
            Some(_) => Outcome::Authorized,
        };

        if let Err(e) = handle.close() {
            warn!("close after session: {}", e);
        }
        Ok(Evaluation { outcome, pages })
    }

    fn enter(&mut self, state: SessionState) {
        self.state = state;
        if let Some(sink) = self.events.as_mut() {
            sink.notify(SessionEvent::StateChanged(state));
        }
    }
}
