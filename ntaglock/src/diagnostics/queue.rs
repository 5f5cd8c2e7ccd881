// ntaglock/src/diagnostics/queue.rs

use log::{info, warn};

use crate::constants::SRAM_SECTOR;
use crate::tag::TagHandle;
use crate::types::PendingWrite;
use crate::Result;

/// Writes waiting for the next tag presence, in the order they were added.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteQueue {
    items: Vec<PendingWrite>,
}

impl WriteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, write: PendingWrite) {
        self.items.push(write);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingWrite> {
        self.items.iter()
    }

    /// Take every queued write, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<PendingWrite> {
        std::mem::take(&mut self.items)
    }
}

/// Result of one queued write.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteOutcome {
    pub write: PendingWrite,
    pub error: Option<String>,
}

impl WriteOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl std::fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_ok() {
            f.write_str("Good SRAM Write")
        } else {
            f.write_str("Bad SRAM Write")
        }
    }
}

/// Apply every queued write in one pass.
///
/// The queue is emptied before anything is sent, so it is empty on every
/// return path; an empty queue does not mean the writes landed. The SRAM
/// sector select is re-issued once, then each write runs on its own: a
/// failed write is recorded and the next one still goes out.
pub fn apply_queued_writes(
    handle: &mut TagHandle<'_>,
    queue: &mut WriteQueue,
) -> Result<Vec<WriteOutcome>> {
    let writes = queue.drain();
    if writes.is_empty() {
        return Ok(Vec::new());
    }

    handle.select_sector(SRAM_SECTOR)?;

    let outcomes: Vec<WriteOutcome> = writes
        .into_iter()
        .map(|write| {
            let error = handle
                .write_page(write.page, write.data)
                .err()
                .map(|e| {
                    warn!("queued write to {} failed: {}", write.page, e);
                    e.to_string()
                });
            WriteOutcome { write, error }
        })
        .collect();

    let good = outcomes.iter().filter(|o| o.is_ok()).count();
    info!("queued writes completed: {}/{} ok", good, outcomes.len());
    Ok(outcomes)
}
