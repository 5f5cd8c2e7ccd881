// ntaglock/src/session/sram.rs

use log::{debug, warn};

use crate::constants::SRAM_SECTOR;
use crate::protocol::pages_to_bytes;
use crate::tag::TagHandle;
use crate::types::{PageAddress, Secret};
use crate::{Error, Result};

/// Secondary authentication through the SRAM mirror: write the 16-byte
/// secret into four consecutive pages starting at `start`, read them back
/// and compare.
///
/// Returns `Ok(false)` when a write or the read-back fails or the bytes
/// differ; the remaining writes are skipped after the first failed one.
/// `Err` is reserved for a secret that is not 16 bytes, a range that runs
/// past 0xFF, and a failed sector select.
pub fn verify_secret_via_sram(
    handle: &mut TagHandle<'_>,
    secret: &Secret,
    start: PageAddress,
) -> Result<bool> {
    let pages = secret.pages()?;
    let end = start
        .offset(3)
        .ok_or_else(|| Error::Precondition(format!("SRAM window at {} runs past 0xFF", start)))?;

    if start.is_sram() {
        handle.ensure_sector(SRAM_SECTOR)?;
    }

    for (i, data) in (0u8..).zip(pages.iter()) {
        // end.offset(3) succeeded, so every page in between exists
        let page = start.offset(i).unwrap_or(end);
        if let Err(e) = handle.write_page(page, *data) {
            warn!("SRAM challenge write to {} failed: {}", page, e);
            return Ok(false);
        }
    }

    let read_back = match handle.read_pages(start, end) {
        Ok(pages) => pages,
        Err(e) => {
            warn!("SRAM challenge read-back failed: {}", e);
            return Ok(false);
        }
    };

    let matched = pages_to_bytes(&read_back) == secret.as_bytes();
    debug!("SRAM challenge {}", if matched { "matched" } else { "mismatched" });
    Ok(matched)
}
