//! `describe_configuration` tool payload.
use schemars::JsonSchema;
use serde::Serialize;

use crate::server::config::ToolkitConfig;

/// Session settings reported to MCP clients. Never includes the API token.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct ConfigurationSummary {
    /// Where the API token came from: `nango` or `direct`.
    pub token_source: String,
    /// Requested monday.com API version, if any.
    pub api_version: Option<String>,
    pub read_only_mode: bool,
    /// `true`, `false`, or `only`.
    pub dynamic_api_tools: String,
    /// Tool selection mode, e.g. `api` or `apps`.
    pub mode: Option<String>,
    pub tool_manager_enabled: bool,
}

pub fn summarize(config: &ToolkitConfig) -> ConfigurationSummary {
    ConfigurationSummary {
        token_source: config.token_source.as_str().to_string(),
        api_version: config.api_version.clone(),
        read_only_mode: config.tools.read_only_mode,
        dynamic_api_tools: config.tools.enable_dynamic_api_tools.to_string(),
        mode: config.tools.mode.clone(),
        tool_manager_enabled: config.tools.enable_tool_manager,
    }
}
