// ntaglock/src/diagnostics/sram.rs

use crate::constants::{SRAM_FIRST_PAGE, SRAM_LAST_PAGE, SRAM_PAGE_COUNT, SRAM_SECTOR};
use crate::protocol::{decode_pages, encode_fast_read, Page};
use crate::tag::TagHandle;
use crate::types::PageAddress;
use crate::Result;

/// Read the whole SRAM bank (0xF0..=0xFF) in one FAST_READ.
///
/// Selects the SRAM sector first unless this connection already did.
/// Anything other than 64 bytes back is a framing error.
pub fn read_sram_bank(handle: &mut TagHandle<'_>) -> Result<Vec<Page>> {
    handle.ensure_sector(SRAM_SECTOR)?;
    let first = PageAddress::new(SRAM_FIRST_PAGE);
    let frame = encode_fast_read(first, PageAddress::new(SRAM_LAST_PAGE))?;
    let raw = handle.transceive(&frame)?;
    decode_pages(&raw, first, SRAM_PAGE_COUNT)
}
