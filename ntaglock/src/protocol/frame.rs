// ntaglock/src/protocol/frame.rs

/// One contactless command as sent over NFC-A: `[opcode] [operands...]`.
///
/// The frame is immutable once built; the transport adds CRC and
/// framing bits itself, so no checksum is carried here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandFrame(Vec<u8>);

impl CommandFrame {
    /// Build a frame from an opcode and its operands.
    pub fn new(opcode: u8, operands: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(1 + operands.len());
        bytes.push(opcode);
        bytes.extend_from_slice(operands);
        Self(bytes)
    }

    pub fn opcode(&self) -> u8 {
        // new() always pushes the opcode first
        self.0[0]
    }

    pub fn operands(&self) -> &[u8] {
        &self.0[1..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for CommandFrame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for CommandFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_spaced(&self.0))
    }
}
