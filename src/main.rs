//! Entry point for monday-mcp.
use std::process::ExitCode;

use monday_mcp::{
    cli::{self, ParsedCommand},
    lib::{
        env::{load_dotenv, ProcessEnv},
        telemetry,
    },
    server::runtime::{self, RuntimeExit},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    let dotenv = load_dotenv();
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    telemetry::log_dotenv(&dotenv);

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let command = cli::into_command(&args, &ProcessEnv).map_err(RuntimeExit::validation)?;

    match command {
        ParsedCommand::RunServer(profile) => runtime::run_server(profile, &ProcessEnv).await,
        ParsedCommand::Help(text) => {
            println!("{text}");
            Ok(())
        }
    }
}
