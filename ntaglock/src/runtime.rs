// ntaglock/src/runtime.rs
//! Tokio integration. Session and diagnostic runs block on pauses and
//! transceives, so they go to the blocking pool instead of an async task.
//! A spawned run cannot be cancelled; aborting the handle only detaches it.

use log::debug;
use tokio::task::JoinHandle;

use crate::collab::{Haptic, SecretStore};
use crate::diagnostics::{self, DiagnosticReport, WriteQueue};
use crate::retry::Pacer;
use crate::session::{AuthorizationSession, SessionReport};
use crate::transport::TagTransport;

/// Run one session on the blocking pool. The session is handed back with
/// the report so its configuration and collaborators can be reused.
pub fn spawn_session<P, H, T, S>(
    mut session: AuthorizationSession<P, H>,
    mut transport: T,
    store: S,
) -> JoinHandle<(AuthorizationSession<P, H>, SessionReport)>
where
    P: Pacer + Send + 'static,
    H: Haptic + Send + 'static,
    T: TagTransport + Send + 'static,
    S: SecretStore + Send + 'static,
{
    debug!("spawning session for {}", transport.uid());
    tokio::task::spawn_blocking(move || {
        let report = session.run(&mut transport, &store);
        (session, report)
    })
}

/// Run a diagnostic scan on the blocking pool, returning the queue with
/// whatever writes were left in it.
pub fn spawn_scan<T>(
    mut transport: T,
    mut queue: WriteQueue,
) -> JoinHandle<(DiagnosticReport, WriteQueue)>
where
    T: TagTransport + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let report = diagnostics::scan(&mut transport, &mut queue);
        (report, queue)
    })
}
