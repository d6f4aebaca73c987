//! Telemetry initialization and startup log helpers.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use super::env::DotenvStatus;

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr; stdout carries MCP frames.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Record where (and whether) a `.env` file was picked up.
pub fn log_dotenv(status: &DotenvStatus) {
    match status {
        DotenvStatus::Loaded(path) => info!(
            target: "monday_mcp::config",
            path = %path.display(),
            "Loaded environment from .env file"
        ),
        DotenvStatus::NotFound => debug!(
            target: "monday_mcp::config",
            "No .env file found; using process environment only"
        ),
        DotenvStatus::Failed(err) => warn!(
            target: "monday_mcp::config",
            error = %err,
            "Failed to load .env file; using process environment only"
        ),
    }
}

/// Payload for logging MCP runtime state as structured telemetry.
#[derive(Debug, Serialize)]
pub struct RuntimeModeTelemetry<'a> {
    pub transport: &'a str,
    pub token_source: &'a str,
    pub api_version: Option<&'a str>,
    pub read_only_mode: bool,
    pub dynamic_api_tools: &'a str,
    pub mode: Option<&'a str>,
    pub instructions: &'a str,
    pub launch_args: &'a [String],
}

/// Emit runtime mode to `tracing`.
pub fn emit_runtime_mode(telemetry: &RuntimeModeTelemetry<'_>) {
    info!(
        target: "monday_mcp::runtime",
        transport = telemetry.transport,
        token_source = telemetry.token_source,
        api_version = telemetry.api_version.unwrap_or("default"),
        read_only_mode = telemetry.read_only_mode,
        dynamic_api_tools = telemetry.dynamic_api_tools,
        mode = telemetry.mode.unwrap_or(""),
        instructions = telemetry.instructions,
        launch_args = ?telemetry.launch_args,
        "Started MCP server"
    );
}
