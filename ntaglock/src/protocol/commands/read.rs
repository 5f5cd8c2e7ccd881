// ntaglock/src/protocol/commands/read.rs

use crate::constants::{OPCODE_FAST_READ, OPCODE_READ};
use crate::protocol::CommandFrame;
use crate::types::PageAddress;
use crate::{Error, Result};

/// Encode READ (0x30). The tag answers with the 16 bytes of four
/// consecutive pages starting at `page`.
pub fn encode_read(page: PageAddress) -> CommandFrame {
    CommandFrame::new(OPCODE_READ, &[page.as_u8()])
}

/// Encode FAST_READ (0x3A) over the inclusive range `start..=end`.
pub fn encode_fast_read(start: PageAddress, end: PageAddress) -> Result<CommandFrame> {
    if start > end {
        return Err(Error::Precondition(format!(
            "fast read range is inverted: {}..{}",
            start, end
        )));
    }
    Ok(CommandFrame::new(
        OPCODE_FAST_READ,
        &[start.as_u8(), end.as_u8()],
    ))
}

/// Number of pages a FAST_READ over `start..=end` returns.
pub fn fast_read_page_count(start: PageAddress, end: PageAddress) -> usize {
    (end.as_u8() as usize).saturating_sub(start.as_u8() as usize) + 1
}
