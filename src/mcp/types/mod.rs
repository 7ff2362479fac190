//! Request types for MCP tools, one module per tool group.
//!
//! Field names follow the wire format (camelCase). Parameters that the
//! backing operation does not consume are still declared so callers sending
//! them are not rejected.

mod ai;
mod artifacts;
mod boards;
mod devsecops;
mod git;
mod projects;
mod testing;
mod work_items;

pub use ai::*;
pub use artifacts::*;
pub use boards::*;
pub use devsecops::*;
pub use git::*;
pub use projects::*;
pub use testing::*;
pub use work_items::*;
