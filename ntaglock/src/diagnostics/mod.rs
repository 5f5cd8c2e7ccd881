// ntaglock/src/diagnostics/mod.rs
//! Low-level tag introspection, independent of the authorization session.

mod info;
mod queue;
mod sram;

pub use info::{full_info, probe_write_status, TagInfo, WriteStatus};
pub use queue::{apply_queued_writes, WriteOutcome, WriteQueue};
pub use sram::read_sram_bank;

use log::warn;

use crate::protocol::Page;
use crate::tag::TagHandle;
use crate::transport::TagTransport;
use crate::Result;

/// Outcome of one diagnostic pass over a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiagnosticReport {
    pub info: TagInfo,
    pub sram: Vec<Page>,
    pub writes: Vec<WriteOutcome>,
    pub error: Option<String>,
}

impl DiagnosticReport {
    /// One line per SRAM page followed by one line per queued write.
    pub fn lines(&self) -> Vec<String> {
        self.sram
            .iter()
            .map(|p| p.to_string())
            .chain(self.writes.iter().map(|w| w.to_string()))
            .collect()
    }
}

impl std::fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            Some(e) => write!(f, "Error reading/writing tag: {}", e),
            None => {
                writeln!(f, "{}", self.info)?;
                for line in self.lines() {
                    writeln!(f, "{}", line)?;
                }
                Ok(())
            }
        }
    }
}

/// Full diagnostic pass for one tag presence: tag info, SRAM bank dump,
/// then any queued writes.
///
/// If the bank read fails the queued writes are not attempted and stay
/// queued for the next presence.
///
/// This is the one place a single presence gets two connect/close scopes:
/// `full_info` closes its connection, then the SRAM pass reconnects. The
/// two never overlap, so at most one handle is open at a time.
pub fn scan(transport: &mut dyn TagTransport, queue: &mut WriteQueue) -> DiagnosticReport {
    let info = full_info(transport);
    match sram_pass(transport, queue) {
        Ok((sram, writes)) => DiagnosticReport {
            info,
            sram,
            writes,
            error: None,
        },
        Err(e) => {
            warn!("diagnostic scan failed: {}", e);
            DiagnosticReport {
                info,
                sram: Vec::new(),
                writes: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

fn sram_pass(
    transport: &mut dyn TagTransport,
    queue: &mut WriteQueue,
) -> Result<(Vec<Page>, Vec<WriteOutcome>)> {
    let mut handle = TagHandle::open(transport)?;
    let sram = read_sram_bank(&mut handle)?;
    let writes = apply_queued_writes(&mut handle, queue)?;
    Ok((sram, writes))
}
