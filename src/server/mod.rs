//! Token resolution, toolkit configuration, and the MCP runtime.

pub mod auth;
pub mod config;
pub mod nango;
pub mod runtime;
