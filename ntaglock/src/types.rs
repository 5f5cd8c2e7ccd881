// ntaglock/src/types.rs

use crate::constants::PAGE_SIZE;
use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// Page address on a Type 2 tag. The extended SRAM range (0xF0..=0xFF)
/// is only reachable after a sector select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "0x{:02X}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageAddress(u8);

impl PageAddress {
    pub const fn new(addr: u8) -> Self {
        Self(addr)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn is_sram(&self) -> bool {
        (crate::constants::SRAM_FIRST_PAGE..=crate::constants::SRAM_LAST_PAGE).contains(&self.0)
    }

    /// Address `n` pages further on, or None past 0xFF.
    pub fn offset(&self, n: u8) -> Option<Self> {
        self.0.checked_add(n).map(Self)
    }
}

impl From<u8> for PageAddress {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}

/// Contents of one 4-byte page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageData([u8; PAGE_SIZE]);

impl PageData {
    pub fn from_bytes(bytes: [u8; PAGE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }

    /// Uppercase, space separated (`AA BB CC DD`)
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes()).to_uppercase()
    }
}

impl TryFrom<&[u8]> for PageData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != PAGE_SIZE {
            return Err(Error::Precondition(format!(
                "page payload must be {} bytes, got {}",
                PAGE_SIZE,
                bytes.len()
            )));
        }
        let mut arr = [0u8; PAGE_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// 32-bit PWD_AUTH password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Password([u8; 4]);

impl Password {
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl Default for Password {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_PASSWORD)
    }
}

impl TryFrom<&[u8]> for Password {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::Precondition(format!(
                "password must be 4 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Tag UID (4, 7 or 10 bytes depending on cascade level)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Colon separated uppercase hex, e.g. `04:A1:B2`
    pub fn to_colon_hex(&self) -> String {
        self.0
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_colon_hex())
    }
}

/// User secret compared against tag or SRAM resident data.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Secret length expected by the SRAM challenge (four pages)
    pub const SRAM_LEN: usize = 16;

    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The stored hash key is free text; its UTF-8 bytes are the secret.
    pub fn from_text(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split a 16-byte secret into the four pages written to SRAM.
    pub fn pages(&self) -> crate::Result<[PageData; 4]> {
        if self.0.len() != Self::SRAM_LEN {
            return Err(Error::Precondition(format!(
                "secret must be {} bytes for the SRAM challenge, got {}",
                Self::SRAM_LEN,
                self.0.len()
            )));
        }
        let mut out = [PageData::from_bytes([0; PAGE_SIZE]); 4];
        for (slot, chunk) in out.iter_mut().zip(self.0.chunks_exact(PAGE_SIZE)) {
            *slot = PageData::try_from(chunk)?;
        }
        Ok(out)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(<{} bytes>)", self.0.len())
    }
}

/// A page write queued by diagnostics for the next tag presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingWrite {
    pub page: PageAddress,
    pub data: PageData,
}

impl PendingWrite {
    pub fn new(page: PageAddress, data: PageData) -> Self {
        Self { page, data }
    }

    /// Parse operator input: page as hex (`F2` or `0xF2`, SRAM range only)
    /// and data as whitespace separated hex bytes. Tokens that are not hex
    /// are skipped and only the first four bytes are used.
    pub fn parse(page_hex: &str, data_hex: &str) -> crate::Result<Self> {
        let trimmed = page_hex.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let page = u8::from_str_radix(digits, 16)
            .map(PageAddress::new)
            .map_err(|_| Error::Precondition(format!("invalid page number '{}'", page_hex)))?;
        if !page.is_sram() {
            return Err(Error::Precondition(format!(
                "page {} is outside the SRAM bank",
                page
            )));
        }

        let bytes: Vec<u8> = data_hex
            .split_whitespace()
            .filter_map(|tok| u8::from_str_radix(tok, 16).ok())
            .take(PAGE_SIZE)
            .collect();
        if bytes.len() != PAGE_SIZE {
            return Err(Error::Precondition("enter exactly 4 bytes".into()));
        }

        Ok(Self::new(page, PageData::try_from(&bytes[..])?))
    }
}

impl std::fmt::Display for PendingWrite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Page {}: {}", self.page, self.data.to_hex())
    }
}

/// Terminal result of one authorization session run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    #[display(fmt = "authorized")]
    Authorized,
    #[display(fmt = "unauthorized")]
    Unauthorized,
    #[display(fmt = "transport error")]
    TransportError,
}

impl Outcome {
    /// What the user sees: transport failures read as a plain NAK.
    pub fn verdict(&self) -> Verdict {
        match self {
            Outcome::Authorized => Verdict::Ok,
            Outcome::Unauthorized | Outcome::TransportError => Verdict::Nak,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    #[display(fmt = "OK")]
    Ok,
    #[display(fmt = "NAK")]
    Nak,
}

/// Write access advertised by the capability container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Writability {
    #[display(fmt = "Yes")]
    Writable,
    #[display(fmt = "No")]
    ReadOnly,
    #[display(fmt = "Unknown")]
    Unknown,
}
