// ntaglock/src/diagnostics/info.rs

use log::warn;

use crate::constants::{CC_PAGE, SCRATCH_PAGE};
use crate::protocol::{decode_capability_container, encode_read};
use crate::tag::{tech_names, TagHandle};
use crate::transport::TagTransport;
use crate::types::{PageAddress, PageData, Uid, Writability};

/// Everything the probe can learn about a tag without touching user data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagInfo {
    pub uid: Uid,
    pub tech_types: Vec<String>,
    pub writable: Writability,
    pub max_frame_size: Option<usize>,
}

impl std::fmt::Display for TagInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Serial Number: {}", self.uid)?;
        writeln!(f, "Tag Type: {}", tech_names(&self.tech_types))?;
        writeln!(f, "Writeable: {}", self.writable)?;
        match self.max_frame_size {
            Some(n) => write!(f, "Max Transceive Size: {} bytes", n),
            None => write!(f, "Max Transceive Size: Unknown"),
        }
    }
}

/// Connect, read the capability container and the transceive limit.
///
/// Failures degrade the affected fields to unknown instead of failing the
/// probe; the connection is closed whatever happens.
pub fn full_info(transport: &mut dyn TagTransport) -> TagInfo {
    let mut info = TagInfo {
        uid: transport.uid(),
        tech_types: transport.tech_list(),
        writable: Writability::Unknown,
        max_frame_size: None,
    };

    let mut handle = match TagHandle::open(transport) {
        Ok(h) => h,
        Err(e) => {
            warn!("tag info: {}", e);
            return info;
        }
    };

    info.max_frame_size = handle.max_transceive_length().ok();
    info.writable = match handle.transceive(&encode_read(PageAddress::new(CC_PAGE))) {
        Ok(cc) => decode_capability_container(&cc),
        Err(e) => {
            warn!("capability container read failed: {}", e);
            Writability::Unknown
        }
    };
    info
}

/// Result of the write capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteStatus {
    pub supported: bool,
    pub connected: bool,
}

/// Try a zeroed page write to the scratch page. `connected` is false
/// only when the connection itself could not be opened.
pub fn probe_write_status(transport: &mut dyn TagTransport) -> WriteStatus {
    let mut handle = match TagHandle::open(transport) {
        Ok(h) => h,
        Err(e) => {
            warn!("write probe: {}", e);
            return WriteStatus {
                supported: false,
                connected: false,
            };
        }
    };

    let supported = match handle.write_page(
        PageAddress::new(SCRATCH_PAGE),
        PageData::from_bytes([0; 4]),
    ) {
        Ok(()) => true,
        Err(e) => {
            warn!("write probe rejected: {}", e);
            false
        }
    };
    WriteStatus {
        supported,
        connected: true,
    }
}
