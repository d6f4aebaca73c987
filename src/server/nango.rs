//! Nango connection lookup used for delegated authentication.
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::lib::{env::EnvSource, errors::NangoError};

pub const NANGO_CONNECTION_ID: &str = "NANGO_CONNECTION_ID";
pub const NANGO_INTEGRATION_ID: &str = "NANGO_INTEGRATION_ID";
pub const NANGO_BASE_URL: &str = "NANGO_BASE_URL";
pub const NANGO_SECRET_KEY: &str = "NANGO_SECRET_KEY";

/// Variables that must be set when Nango authentication is enabled.
pub const NANGO_ENV_VARS: [&str; 4] = [
    NANGO_CONNECTION_ID,
    NANGO_INTEGRATION_ID,
    NANGO_BASE_URL,
    NANGO_SECRET_KEY,
];

/// Names from [`NANGO_ENV_VARS`] that are unset or empty in `env`.
pub fn missing_env_vars<E: EnvSource + ?Sized>(env: &E) -> Vec<&'static str> {
    NANGO_ENV_VARS
        .into_iter()
        .filter(|name| env.non_empty(name).is_none())
        .collect()
}

/// Connection coordinates read from the `NANGO_*` variables.
#[derive(Clone)]
pub struct NangoSettings {
    pub connection_id: String,
    pub integration_id: String,
    pub base_url: String,
    pub secret_key: String,
}

impl std::fmt::Debug for NangoSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NangoSettings")
            .field("connection_id", &self.connection_id)
            .field("integration_id", &self.integration_id)
            .field("base_url", &self.base_url)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl NangoSettings {
    /// Read all four variables, reporting every missing one.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Result<Self, NangoError> {
        let missing = missing_env_vars(env);
        if !missing.is_empty() {
            return Err(NangoError::MissingEnvironment { missing });
        }

        let read = |name: &str| env.non_empty(name).unwrap_or_default();
        Ok(Self {
            connection_id: read(NANGO_CONNECTION_ID),
            integration_id: read(NANGO_INTEGRATION_ID),
            base_url: read(NANGO_BASE_URL),
            secret_key: read(NANGO_SECRET_KEY),
        })
    }

    /// `<base_url>/connection/<connection_id>`
    pub fn connection_url(&self) -> String {
        format!("{}/connection/{}", self.base_url, self.connection_id)
    }
}

/// Thin client over the Nango connection endpoint.
///
/// Every call hits the network; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct NangoClient {
    http: Client,
    settings: NangoSettings,
}

impl NangoClient {
    pub fn new(settings: NangoSettings) -> Result<Self, NangoError> {
        let http = Client::builder().build().map_err(NangoError::Client)?;
        Ok(Self { http, settings })
    }

    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Result<Self, NangoError> {
        Self::new(NangoSettings::from_env(env)?)
    }

    pub fn settings(&self) -> &NangoSettings {
        &self.settings
    }

    /// Fetch the full connection record, asking Nango to refresh the token.
    pub async fn get_connection_credentials(&self) -> Result<Value, NangoError> {
        let url = self.settings.connection_url();
        debug!(
            target: "monday_mcp::nango",
            url = %url,
            integration_id = %self.settings.integration_id,
            "Requesting Nango connection"
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("provider_config_key", self.settings.integration_id.as_str()),
                ("refresh_token", "true"),
            ])
            .bearer_auth(&self.settings.secret_key)
            .send()
            .await
            .map_err(NangoError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            warn!(
                target: "monday_mcp::nango",
                status = status.as_u16(),
                status_text = %status_text,
                "Nango rejected the connection request"
            );
            return Err(NangoError::Http {
                status: status.as_u16(),
                status_text,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(NangoError::InvalidBody)?;
        info!(
            target: "monday_mcp::nango",
            connection_id = %self.settings.connection_id,
            status = status.as_u16(),
            "Fetched Nango connection"
        );
        Ok(body)
    }

    /// Fetch the connection and return `credentials.access_token`.
    pub async fn get_access_token(&self) -> Result<String, NangoError> {
        let connection = self.get_connection_credentials().await?;
        extract_access_token(&connection)
    }
}

/// Read a non-empty `credentials.access_token` string out of a connection record.
pub fn extract_access_token(connection: &Value) -> Result<String, NangoError> {
    connection
        .pointer("/credentials/access_token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(NangoError::TokenNotFound)
}

/// Fetch the connection record using the process-style `env`.
pub async fn get_connection_credentials<E: EnvSource + ?Sized>(
    env: &E,
) -> Result<Value, NangoError> {
    NangoClient::from_env(env)?.get_connection_credentials().await
}

/// Fetch a fresh access token using the process-style `env`.
pub async fn get_access_token<E: EnvSource + ?Sized>(env: &E) -> Result<String, NangoError> {
    NangoClient::from_env(env)?.get_access_token().await
}
