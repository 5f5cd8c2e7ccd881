// ntaglock/src/protocol/commands/sector.rs

use crate::constants::OPCODE_PWD_AUTH;
use crate::protocol::CommandFrame;

/// Encode the sector select that exposes the extended page range
/// (0xF0..=0xFF). Operands are all 0xFF except the sector byte at
/// operand offset 1, so sector 0xFF yields `1B FF FF FF FF`.
pub fn encode_sector_select(sector: u8) -> CommandFrame {
    CommandFrame::new(OPCODE_PWD_AUTH, &[0xFF, sector, 0xFF, 0xFF])
}
