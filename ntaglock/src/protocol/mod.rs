// ntaglock/src/protocol/mod.rs

pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use commands::*;
pub use frame::CommandFrame;
pub use responses::*;
