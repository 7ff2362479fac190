//! MCP server exposing an Azure DevOps organization as tools.
//!
//! Tools are grouped by capability: work items, boards and sprints, projects,
//! git, testing, DevSecOps, artifacts, and AI-assisted insights. The first
//! four groups call the Azure DevOps REST API; the rest serve representative
//! data without an upstream dependency.

pub mod azdo;
pub mod config;
pub mod mcp;
pub mod models;
pub mod services;
