//! Shared library modules providing error types, environment access, and telemetry initialization.

pub mod env;
pub mod errors;
pub mod telemetry;
