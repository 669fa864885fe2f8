//! Adzuna MCP Server library.
//!
//! Provides the [`server::AdzunaMcpServer`] MCP server handler and tool parameter types.
//! Used by the `adzuna-mcp` binary and available for integration testing.

pub mod server;
pub mod tools;
