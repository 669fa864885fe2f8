//! Adzuna Jobs workspace root.
//!
//! Re-exports the API client and MCP server crates so end-to-end tests can
//! reach both through one dependency.

pub use adzuna_client as client;
pub use adzuna_mcp as mcp;
