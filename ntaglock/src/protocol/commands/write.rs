// ntaglock/src/protocol/commands/write.rs

use crate::constants::{OPCODE_WRITE, PAGE_SIZE};
use crate::protocol::CommandFrame;
use crate::types::PageAddress;
use crate::{Error, Result};

/// Encode a single page write (0xA2).
/// Layout: opcode(1) + page(1) + data(4)
pub fn encode_fast_write(page: PageAddress, data: &[u8]) -> Result<CommandFrame> {
    if data.len() != PAGE_SIZE {
        return Err(Error::Precondition(format!(
            "write payload must be {} bytes, got {}",
            PAGE_SIZE,
            data.len()
        )));
    }
    let mut operands = [0u8; 1 + PAGE_SIZE];
    operands[0] = page.as_u8();
    operands[1..].copy_from_slice(data);
    Ok(CommandFrame::new(OPCODE_WRITE, &operands))
}
