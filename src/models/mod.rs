//! Wire types for Azure DevOps REST payloads.
//!
//! These are partial views: each struct names only the fields the services
//! inspect (for slicing, filtering, or lookups) and keeps everything else in
//! a flattened map so payloads round-trip to callers unchanged. Operations
//! that pass a payload through untouched use `serde_json::Value` directly.

mod core;
mod git;
mod work_items;

pub use core::*;
pub use git::*;
pub use work_items::*;
