// ntaglock/src/transport/traits.rs

use crate::types::Uid;
use crate::Result;

/// Half-duplex request/response channel to a tag in the field.
///
/// Implemented by the host platform (for example over Android's NfcA
/// technology). The protocol core never holds more than one connection
/// and always calls `close` when it is done, including after a failed
/// `connect`, so implementations must treat `close` as idempotent.
pub trait TagTransport {
    /// Anti-collision UID reported at discovery time
    fn uid(&self) -> Uid;

    /// Technologies the platform advertises for the tag (e.g. `NfcA`,
    /// `MifareUltralight`, `Ndef`). Default implementation reports none.
    fn tech_list(&self) -> Vec<String> {
        Vec::new()
    }

    /// Open the connection.
    fn connect(&mut self) -> Result<()>;

    /// Send one command frame and return the raw response.
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>>;

    /// Largest frame the platform accepts for `transceive`. Only valid
    /// while connected.
    fn max_transceive_length(&self) -> Result<usize>;

    /// Close the connection. Must tolerate repeated calls.
    fn close(&mut self) -> Result<()>;

    fn is_connected(&self) -> bool;
}

impl<T: TagTransport + ?Sized> TagTransport for Box<T> {
    fn uid(&self) -> Uid {
        (**self).uid()
    }
    fn tech_list(&self) -> Vec<String> {
        (**self).tech_list()
    }
    fn connect(&mut self) -> Result<()> {
        (**self).connect()
    }
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(frame)
    }
    fn max_transceive_length(&self) -> Result<usize> {
        (**self).max_transceive_length()
    }
    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}
