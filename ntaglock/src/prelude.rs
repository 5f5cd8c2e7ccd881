// ntaglock/src/prelude.rs

pub use crate::collab::{Haptic, MemorySecretStore, SecretStore};
pub use crate::diagnostics::{DiagnosticReport, TagInfo, WriteQueue};
pub use crate::protocol::{Command, Page, Response};
pub use crate::retry::{Pacer, RetryPolicy};
pub use crate::session::{
    AuthorizationSession, SessionBuilder, SessionConfig, SessionEvent, SessionReport,
    SessionState,
};
pub use crate::tag::TagHandle;
pub use crate::transport::TagTransport;
pub use crate::trigger::{SessionDriver, TagTrigger};
pub use crate::{
    Error, ErrorKind, Outcome, PageAddress, PageData, Password, PendingWrite, Result, Secret,
    Uid, Verdict, Writability,
};

pub use crate::utils::{bytes_to_hex_spaced, ms};
