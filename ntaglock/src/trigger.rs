// ntaglock/src/trigger.rs
//! Hand-off between the tag-discovery callback and the session runner.
//!
//! Discovery may fire on any thread and at any time; the runner picks up
//! the most recent tag when it is ready. A tag offered while a run is in
//! progress waits for the next poll instead of being lost.

use std::sync::Mutex;

use log::debug;

use crate::collab::{Haptic, SecretStore};
use crate::retry::Pacer;
use crate::session::{AuthorizationSession, SessionReport};
use crate::transport::TagTransport;

/// Single-slot mailbox holding the latest discovered tag.
#[derive(Debug)]
pub struct TagTrigger<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Default for TagTrigger<T> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<T> TagTrigger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly discovered tag. Returns the tag it superseded, if
    /// the previous one was never picked up.
    pub fn offer(&self, tag: T) -> Option<T> {
        let mut slot = self.slot.lock().unwrap_or_else(|p| p.into_inner());
        let previous = slot.replace(tag);
        if previous.is_some() {
            debug!("pending tag superseded by a newer presence");
        }
        previous
    }

    /// Remove and return the pending tag.
    pub fn take(&self) -> Option<T> {
        self.slot.lock().unwrap_or_else(|p| p.into_inner()).take()
    }

    pub fn is_pending(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .is_some()
    }
}

/// Runs one session per pending tag.
pub struct SessionDriver<P, H> {
    session: AuthorizationSession<P, H>,
}

impl<P: Pacer, H: Haptic> SessionDriver<P, H> {
    pub fn new(session: AuthorizationSession<P, H>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &AuthorizationSession<P, H> {
        &self.session
    }

    /// Take the pending tag, if any, and run a session against it. The
    /// slot is emptied before the run starts, so a presence offered
    /// during the run is kept for the next poll.
    pub fn poll<T: TagTransport>(
        &mut self,
        trigger: &TagTrigger<T>,
        store: &dyn SecretStore,
    ) -> Option<SessionReport> {
        let mut tag = trigger.take()?;
        Some(self.session.run(&mut tag, store))
    }
}
