//! MCP tool parameter types and shared helpers.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool registration.

pub mod helpers;
pub mod params;

pub use helpers::*;
pub use params::*;
