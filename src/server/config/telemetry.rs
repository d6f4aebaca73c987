use tracing::info;

use super::ToolkitConfig;

pub fn log_loaded(config: &ToolkitConfig) {
    info!(
        target: "monday_mcp::config",
        token_source = config.token_source.as_str(),
        api_version = config.api_version.as_deref().unwrap_or("default"),
        read_only_mode = config.tools.read_only_mode,
        dynamic_api_tools = %config.tools.enable_dynamic_api_tools,
        mode = config.tools.mode.as_deref().unwrap_or(""),
        enable_tool_manager = config.tools.enable_tool_manager,
        "Toolkit configuration resolved"
    );
}
