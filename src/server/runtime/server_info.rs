use crate::{cli::LaunchProfile, server::config::ToolkitConfig};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(profile: &LaunchProfile, config: &ToolkitConfig) -> String {
    format!(
        "monday.com toolkit ready over stdio (auth={auth}, api_version={version}, read_only_mode={read_only}, dynamic_api_tools={dynamic}, mode={mode}). Call describe_configuration for the active session settings.",
        auth = profile.auth_mode().as_str(),
        version = config.api_version.as_deref().unwrap_or("default"),
        read_only = config.tools.read_only_mode,
        dynamic = config.tools.enable_dynamic_api_tools,
        mode = config.tools.mode.as_deref().unwrap_or("api"),
    )
}
