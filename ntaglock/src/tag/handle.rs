// ntaglock/src/tag/handle.rs

use log::{debug, warn};

use crate::protocol::{Command, CommandFrame, Page, Response};
use crate::transport::TagTransport;
use crate::types::{PageAddress, PageData, Password, Uid};
use crate::{Error, Result};

/// Exclusive, scoped connection to one tag.
///
/// Opening connects the transport; dropping (or `close`) always closes
/// it, whichever way the protocol routine exits. The mutable borrow of
/// the transport guarantees at most one handle per tag at a time.
pub struct TagHandle<'t> {
    transport: &'t mut dyn TagTransport,
    selected_sector: Option<u8>,
    closed: bool,
}

impl<'t> TagHandle<'t> {
    /// Connect the transport. On failure the transport is still closed
    /// and a `Connection` error is returned.
    pub fn open(transport: &'t mut dyn TagTransport) -> Result<Self> {
        if let Err(e) = transport.connect() {
            if let Err(close_err) = transport.close() {
                warn!("close after failed connect: {}", close_err);
            }
            return Err(match e {
                Error::Connection(_) => e,
                other => Error::Connection(other.to_string()),
            });
        }
        debug!("connected to tag {}", transport.uid());
        Ok(Self {
            transport,
            selected_sector: None,
            closed: false,
        })
    }

    pub fn uid(&self) -> Uid {
        self.transport.uid()
    }

    pub fn tech_list(&self) -> Vec<String> {
        self.transport.tech_list()
    }

    pub fn max_transceive_length(&self) -> Result<usize> {
        self.transport.max_transceive_length()
    }

    /// Send a prepared frame and return the raw response.
    pub fn transceive(&mut self, frame: &CommandFrame) -> Result<Vec<u8>> {
        if self.closed {
            return Err(Error::NotConnected);
        }
        debug!("-> {}", frame);
        match self.transport.transceive(frame.as_bytes()) {
            Ok(resp) => {
                debug!("<- {}", crate::utils::bytes_to_hex_spaced(&resp));
                Ok(resp)
            }
            Err(e) => {
                debug!("<- error: {}", e);
                Err(e)
            }
        }
    }

    /// Encode, send and decode one command.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        let frame = cmd.encode()?;
        let raw = self.transceive(&frame)?;
        Response::decode(cmd, &raw)
    }

    pub fn authenticate(&mut self, password: Password) -> Result<()> {
        self.execute(&Command::Authenticate { password }).map(|_| ())
    }

    /// FAST_READ over `start..=end`, decoded into pages.
    pub fn read_pages(&mut self, start: PageAddress, end: PageAddress) -> Result<Vec<Page>> {
        self.execute(&Command::FastRead { start, end })
            .map(Response::into_pages)
    }

    pub fn write_page(&mut self, page: PageAddress, data: PageData) -> Result<()> {
        self.execute(&Command::FastWrite { page, data }).map(|_| ())
    }

    /// Issue a sector select unconditionally.
    pub fn select_sector(&mut self, sector: u8) -> Result<()> {
        self.execute(&Command::SectorSelect { sector })?;
        self.selected_sector = Some(sector);
        Ok(())
    }

    /// Issue a sector select only if this connection has not already
    /// selected `sector`.
    pub fn ensure_sector(&mut self, sector: u8) -> Result<()> {
        if self.selected_sector == Some(sector) {
            return Ok(());
        }
        self.select_sector(sector)
    }

    /// Close explicitly. Dropping the handle does the same.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.transport.close()
    }
}

impl Drop for TagHandle<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.transport.close() {
            warn!("failed to close tag handle: {}", e);
        }
    }
}
