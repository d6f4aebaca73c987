//! API token resolution performed at startup.
use std::fmt;

use tracing::info;

use super::nango::NangoClient;
use crate::{
    cli::AuthMode,
    lib::{env::EnvSource, errors::NangoError},
};

/// Source of the monday.com API token handed to the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Nango,
    Direct,
}

impl TokenSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenSource::Nango => "nango",
            TokenSource::Direct => "direct",
        }
    }
}

/// API token together with where it came from.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    pub token: String,
    pub source: TokenSource,
}

impl fmt::Debug for ResolvedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedToken")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Produce the API token for `auth`, calling Nango when delegated.
pub async fn resolve_api_token<E: EnvSource + ?Sized>(
    auth: &AuthMode,
    env: &E,
) -> Result<ResolvedToken, NangoError> {
    match auth {
        AuthMode::Nango => {
            info!(
                target: "monday_mcp::auth",
                "Using Nango for authentication"
            );
            let client = NangoClient::from_env(env)?;
            let token = client.get_access_token().await?;
            info!(
                target: "monday_mcp::auth",
                connection_id = %client.settings().connection_id,
                "Obtained monday.com API token from Nango"
            );
            Ok(ResolvedToken {
                token,
                source: TokenSource::Nango,
            })
        }
        AuthMode::Direct { token } => {
            info!(
                target: "monday_mcp::auth",
                "Using direct token authentication"
            );
            Ok(ResolvedToken {
                token: token.clone(),
                source: TokenSource::Direct,
            })
        }
    }
}
