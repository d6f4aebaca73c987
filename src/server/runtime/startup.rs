use std::process::ExitCode;

use anyhow::Error;
use rmcp::ServiceExt;

use crate::{
    cli::LaunchProfile,
    lib::{
        env::EnvSource,
        errors::ValidationError,
        telemetry::{emit_runtime_mode, RuntimeModeTelemetry},
    },
    server::{
        auth,
        config::{self, ToolkitConfig},
        runtime::{build_instructions, MondayToolkitServer},
    },
};

/// Bundles a user-facing failure message with the process exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    /// Validation problems are printed as-is, one block per diagnostic.
    pub fn validation(error: ValidationError) -> Self {
        Self {
            message: error.to_string().trim_end().to_string(),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("Fatal error: {err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Resolve the API token, build the toolkit, and serve it on stdio until the
/// client disconnects.
pub async fn run_server<E: EnvSource + ?Sized>(
    profile: LaunchProfile,
    env: &E,
) -> Result<(), RuntimeExit> {
    let token = auth::resolve_api_token(profile.auth_mode(), env)
        .await
        .map_err(RuntimeExit::from_error)?;
    let toolkit_config = ToolkitConfig::from_args(&profile.args, token);
    config::telemetry::log_loaded(&toolkit_config);

    let instructions = build_instructions(&profile, &toolkit_config);
    emit_runtime_mode(&RuntimeModeTelemetry {
        transport: "stdio",
        token_source: toolkit_config.token_source.as_str(),
        api_version: toolkit_config.api_version.as_deref(),
        read_only_mode: toolkit_config.tools.read_only_mode,
        dynamic_api_tools: toolkit_config.tools.enable_dynamic_api_tools.as_str(),
        mode: toolkit_config.tools.mode.as_deref(),
        instructions: &instructions,
        launch_args: &profile.launch_args,
    });

    let server = MondayToolkitServer::new(toolkit_config, instructions);
    run_stdio(server).await
}

async fn run_stdio(server: MondayToolkitServer) -> Result<(), RuntimeExit> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;
    running.waiting().await.map_err(RuntimeExit::from_error)?;
    Ok(())
}
