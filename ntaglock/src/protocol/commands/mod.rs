// ntaglock/src/protocol/commands/mod.rs

pub mod auth;
pub mod read;
pub mod sector;
pub mod write;

pub use auth::encode_authenticate;
pub use read::{encode_fast_read, encode_read, fast_read_page_count};
pub use sector::encode_sector_select;
pub use write::encode_fast_write;

use crate::constants::PAGE_SIZE;
use crate::protocol::CommandFrame;
use crate::types::{PageAddress, PageData, Password};
use crate::Result;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Authenticate {
        password: Password,
    },
    Read {
        page: PageAddress,
    },
    FastRead {
        start: PageAddress,
        end: PageAddress,
    },
    FastWrite {
        page: PageAddress,
        data: PageData,
    },
    SectorSelect {
        sector: u8,
    },
}

impl Command {
    /// Opcode byte on the wire.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::Authenticate { .. } | Self::SectorSelect { .. } => {
                crate::constants::OPCODE_PWD_AUTH
            }
            Self::Read { .. } => crate::constants::OPCODE_READ,
            Self::FastRead { .. } => crate::constants::OPCODE_FAST_READ,
            Self::FastWrite { .. } => crate::constants::OPCODE_WRITE,
        }
    }

    /// Encode the command into its wire frame.
    pub fn encode(&self) -> Result<CommandFrame> {
        match self {
            Self::Authenticate { password } => Ok(encode_authenticate(*password)),
            Self::Read { page } => Ok(encode_read(*page)),
            Self::FastRead { start, end } => encode_fast_read(*start, *end),
            Self::FastWrite { page, data } => encode_fast_write(*page, data.as_bytes()),
            Self::SectorSelect { sector } => Ok(encode_sector_select(*sector)),
        }
    }

    /// Exact response length the tag must return, or None when the
    /// response is an opaque acknowledgement.
    pub fn expected_response_len(&self) -> Option<usize> {
        match self {
            Self::Read { .. } => Some(4 * PAGE_SIZE),
            Self::FastRead { start, end } => Some(fast_read_page_count(*start, *end) * PAGE_SIZE),
            _ => None,
        }
    }
}
