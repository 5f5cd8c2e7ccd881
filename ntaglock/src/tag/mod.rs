// ntaglock/src/tag/mod.rs

mod handle;
mod info;

pub use handle::TagHandle;
pub use info::{data_format, short_tech_name, tech_names, TagSummary};
