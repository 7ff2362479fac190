//! Tool routers, one per capability group. Each module contributes a router
//! that [`McpServer::new`](crate::mcp::McpServer::new) merges into the full
//! tool surface.

pub(crate) mod ai;
pub(crate) mod artifacts;
pub(crate) mod boards;
pub(crate) mod devsecops;
pub(crate) mod git;
pub(crate) mod projects;
pub(crate) mod testing;
pub(crate) mod work_items;
