// ntaglock/src/session/events.rs

use crate::types::Outcome;

/// Authorization session states. The last three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    Idle,
    Connecting,
    Authenticating,
    Reading,
    Evaluating,
    Authorized,
    Unauthorized,
    TransportError,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionState::Authorized | SessionState::Unauthorized | SessionState::TransportError
        )
    }
}

impl From<Outcome> for SessionState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Authorized => SessionState::Authorized,
            Outcome::Unauthorized => SessionState::Unauthorized,
            Outcome::TransportError => SessionState::TransportError,
        }
    }
}

/// Notification pushed to the UI layer. The channel only flows outward;
/// the session never reads anything back from it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionEvent {
    StateChanged(SessionState),
    Finished(Outcome),
}

/// Receiver side of the notification channel.
pub trait EventSink {
    fn notify(&mut self, event: SessionEvent);
}

impl EventSink for std::sync::mpsc::Sender<SessionEvent> {
    fn notify(&mut self, event: SessionEvent) {
        // A dropped receiver just means nobody is watching.
        let _ = self.send(event);
    }
}

#[cfg(feature = "async")]
impl EventSink for tokio::sync::mpsc::UnboundedSender<SessionEvent> {
    fn notify(&mut self, event: SessionEvent) {
        let _ = self.send(event);
    }
}

/// Collects events in memory.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<SessionEvent>,
}

impl EventLog {
    /// States visited, in order.
    pub fn states(&self) -> Vec<SessionState> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::StateChanged(s) => Some(*s),
                SessionEvent::Finished(_) => None,
            })
            .collect()
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: SessionEvent) {
        self.events.push(event);
    }
}

/// Shared sink, so the caller keeps a handle to what the session records.
impl<S: EventSink> EventSink for std::sync::Arc<std::sync::Mutex<S>> {
    fn notify(&mut self, event: SessionEvent) {
        self.lock()
            .unwrap_or_else(|p| p.into_inner())
            .notify(event);
    }
}
