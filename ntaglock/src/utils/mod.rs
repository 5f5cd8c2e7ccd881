//! Small helpers shared across the crate: hex formatting for logs and
//! reports, and millisecond conversions for the pacing knobs.

pub mod hex;
pub mod time;

pub use hex::*;
pub use time::*;
