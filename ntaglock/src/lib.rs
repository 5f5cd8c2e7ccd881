// ntaglock/src/lib.rs

//! ntaglock
//!
//! Password-gated access to NTAG Type 2 tags: command framing, bounded
//! retries, the authorization session and a diagnostic probe.

pub mod collab;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod retry;
#[cfg(feature = "async")]
pub mod runtime;
pub mod session;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod trigger;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the newtypes in `types` are reachable without the module path.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
