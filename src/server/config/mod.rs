//! Build the configuration handed to the toolkit.
use std::fmt;

use serde_json::{Map, Value};

use crate::{
    cli::ValidatedArgs,
    server::auth::{ResolvedToken, TokenSource},
};

pub mod telemetry;
pub mod tools;

pub use tools::ToolsConfiguration;

/// Everything the toolkit needs to serve monday.com tools.
#[derive(Clone)]
pub struct ToolkitConfig {
    pub api_token: String,
    pub token_source: TokenSource,
    /// `None` lets the toolkit pick its default API version.
    pub api_version: Option<String>,
    /// Extra request options forwarded to the API client; empty by default.
    pub request_config: Map<String, Value>,
    pub tools: ToolsConfiguration,
}

impl fmt::Debug for ToolkitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolkitConfig")
            .field("api_token", &"<redacted>")
            .field("token_source", &self.token_source)
            .field("api_version", &self.api_version)
            .field("request_config", &self.request_config)
            .field("tools", &self.tools)
            .finish()
    }
}

impl ToolkitConfig {
    pub fn from_args(args: &ValidatedArgs, token: ResolvedToken) -> Self {
        Self {
            api_token: token.token,
            token_source: token.source,
            api_version: args.api_version().map(str::to_string),
            request_config: Map::new(),
            tools: ToolsConfiguration::from_args(args),
        }
    }
}
