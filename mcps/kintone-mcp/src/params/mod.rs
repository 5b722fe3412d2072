//! Parameter types for kintone MCP tools

mod apps;
mod comments;
mod files;
mod records;
mod status;

pub use apps::*;
pub use comments::*;
pub use files::*;
pub use records::*;
pub use status::*;

