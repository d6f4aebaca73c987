use std::sync::Arc;

use rmcp::{
    handler::server::ServerHandler,
    model::{ErrorData, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, Json,
};

use crate::{
    server::config::ToolkitConfig,
    tools::{self, ConfigurationSummary, ServerToolRouter},
};

/// MCP server built from the resolved toolkit configuration.
#[derive(Clone)]
pub struct MondayToolkitServer {
    config: Arc<ToolkitConfig>,
    instructions: Arc<String>,
    tool_router: ServerToolRouter<Self>,
}

impl MondayToolkitServer {
    pub fn new(config: ToolkitConfig, instructions: String) -> Self {
        let router = tools::build_router(Self::tool_router);
        Self {
            config: Arc::new(config),
            instructions: Arc::new(instructions),
            tool_router: router,
        }
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }
}

#[tool_router(router = tool_router)]
impl MondayToolkitServer {
    #[tool(
        name = "describe_configuration",
        description = "Report the active monday.com session settings (API version, read-only mode, dynamic API tools, tool mode, token source)"
    )]
    async fn describe_configuration(&self) -> Result<Json<ConfigurationSummary>, ErrorData> {
        Ok(Json(tools::summarize(&self.config)))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for MondayToolkitServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }
}
