// ntaglock/src/protocol/responses/pages.rs

use crate::constants::PAGE_SIZE;
use crate::protocol::parser;
use crate::types::{PageAddress, PageData};
use crate::{Error, Result};

/// One decoded page: its address and 4 bytes of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    pub address: PageAddress,
    pub data: PageData,
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Page {}: {}", self.address, self.data.to_hex())
    }
}

/// Slice a READ/FAST_READ response into `count` pages starting at `base`.
/// Layout: data(4*N)
pub fn decode_pages(frame: &[u8], base: PageAddress, count: usize) -> Result<Vec<Page>> {
    let expected = count.checked_mul(PAGE_SIZE).ok_or(Error::Framing {
        expected: usize::MAX,
        actual: frame.len(),
    })?;
    parser::expect_len(frame, expected)?;

    let mut pages = Vec::with_capacity(count);
    for i in 0..count {
        let address = u8::try_from(i)
            .ok()
            .and_then(|n| base.offset(n))
            .ok_or_else(|| {
                Error::Precondition(format!("{} pages from {} run past 0xFF", count, base))
            })?;
        let chunk = parser::slice_at(frame, i * PAGE_SIZE, PAGE_SIZE)?;
        pages.push(Page {
            address,
            data: PageData::try_from(chunk)?,
        });
    }
    Ok(pages)
}

/// Concatenate page contents back into a flat byte vector.
pub fn pages_to_bytes(pages: &[Page]) -> Vec<u8> {
    pages
        .iter()
        .flat_map(|p| p.data.as_bytes().iter().copied())
        .collect()
}
