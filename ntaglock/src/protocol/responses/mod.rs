// ntaglock/src/protocol/responses/mod.rs

pub mod capability;
pub mod pages;

pub use capability::decode_capability_container;
pub use pages::{decode_pages, pages_to_bytes, Page};

use crate::constants::PAGE_SIZE;
use crate::protocol::commands::Command;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Opaque acknowledgement (PWD_AUTH, sector select, write). Content is
    /// kept for logging but never interpreted.
    Ack(Vec<u8>),
    Pages(Vec<Page>),
}

impl Response {
    /// Decode a raw response for the command that produced it.
    pub fn decode(cmd: &Command, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            Command::Read { page: base } | Command::FastRead { start: base, .. } => {
                let count = cmd.expected_response_len().unwrap_or(0) / PAGE_SIZE;
                Ok(Self::Pages(decode_pages(data, *base, count)?))
            }
            Command::Authenticate { .. }
            | Command::SectorSelect { .. }
            | Command::FastWrite { .. } => Ok(Self::Ack(data.to_vec())),
        }
    }

    /// Pages carried by a read response, empty for acknowledgements.
    pub fn into_pages(self) -> Vec<Page> {
        match self {
            Response::Pages(pages) => pages,
            Response::Ack(_) => Vec::new(),
        }
    }
}
