use crate::cli::{FlagValue, ValidatedArgs};

/// Which tools the toolkit exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsConfiguration {
    pub read_only_mode: bool,
    pub enable_dynamic_api_tools: FlagValue,
    pub mode: Option<String>,
    /// Always off for this launcher.
    pub enable_tool_manager: bool,
}

impl ToolsConfiguration {
    pub fn from_args(args: &ValidatedArgs) -> Self {
        Self {
            read_only_mode: args.read_only_mode(),
            enable_dynamic_api_tools: args.dynamic_api_tools(),
            mode: args.mode().map(str::to_string),
            enable_tool_manager: false,
        }
    }
}
