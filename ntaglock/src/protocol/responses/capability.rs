// ntaglock/src/protocol/responses/capability.rs

use crate::types::Writability;

/// Decode the capability container (page 0x03).
///
/// Byte 2 carries the access nibble; any bit set in its low half marks
/// the tag writable. Frames shorter than a page are not an error, they
/// simply leave the answer unknown.
pub fn decode_capability_container(frame: &[u8]) -> Writability {
    if frame.len() < 4 {
        return Writability::Unknown;
    }
    if frame[2] & 0x0F > 0 {
        Writability::Writable
    } else {
        Writability::ReadOnly
    }
}
