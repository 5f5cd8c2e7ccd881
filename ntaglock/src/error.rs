// ntaglock/src/error.rs

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// The transport could not be opened (tag left the field, tech missing).
    #[error("connection error: {0}")]
    Connection(String),

    /// A transceive call failed on the contactless link.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("operation timed out")]
    Timeout,

    /// Response length does not match what the command implies.
    #[error("framing error: expected {expected} bytes, got {actual}")]
    Framing { expected: usize, actual: usize },

    /// Malformed operand supplied by the caller; never retried.
    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("gave up after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: Box<Error> },

    #[error("tag handle is not connected")]
    NotConnected,
}

/// Coarse classification kept for diagnostics after the session boundary
/// has collapsed everything into a NAK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    Connection,
    Transport,
    Framing,
    Precondition,
}

impl Error {
    /// Whether another attempt of the same operation may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::Timeout | Error::Framing { .. }
        )
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Connection(_) | Error::NotConnected => ErrorKind::Connection,
            Error::Transport(_) | Error::Timeout => ErrorKind::Transport,
            Error::Framing { .. } => ErrorKind::Framing,
            Error::Precondition(_) => ErrorKind::Precondition,
            // Exhaustion reports what the link was doing when we gave up.
            Error::RetriesExhausted { last, .. } => last.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
