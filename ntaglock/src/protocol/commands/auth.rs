// ntaglock/src/protocol/commands/auth.rs

use crate::constants::OPCODE_PWD_AUTH;
use crate::protocol::CommandFrame;
use crate::types::Password;

/// Encode PWD_AUTH (0x1B) followed by the 4-byte password.
pub fn encode_authenticate(password: Password) -> CommandFrame {
    CommandFrame::new(OPCODE_PWD_AUTH, password.as_bytes())
}
