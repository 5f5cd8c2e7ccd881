//! Hexadecimal helpers used for frame logging and diagnostic reports.

use std::fmt::Write;

/// Lowercase hex, one space between bytes: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        // writing into a String cannot fail
        let _ = write!(s, "{:02x}", b);
    }
    s
}
