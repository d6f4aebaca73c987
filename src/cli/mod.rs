//! CLI entrypoint module structure.
pub mod args;
pub mod profile;
pub mod resolve;
pub mod validate;

pub use args::{
    help_command, render_help, wants_help, ArgSpec, DefaultValue, ARG_SPECS, ENV_PREFIX,
};
pub use profile::{build_launch_args, LaunchProfile};
pub use resolve::{parse_args, parse_args_with, ParsedArgs, ValueSource};
pub use validate::{
    coerce_flag, validate_args, validate_args_with, ArgValue, AuthMode, FlagValue, ValidatedArgs,
};

use crate::lib::{env::EnvSource, errors::ValidationError};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    RunServer(LaunchProfile),
    /// Rendered `--help` output.
    Help(String),
}

/// Resolve and validate `args` (without the program name) against `env`.
pub fn into_command<E: EnvSource + ?Sized>(
    args: &[String],
    env: &E,
) -> Result<ParsedCommand, ValidationError> {
    if wants_help(args) {
        return Ok(ParsedCommand::Help(render_help()));
    }

    let parsed = parse_args(args, env);
    let validated = validate_args(&parsed, env)?;
    Ok(ParsedCommand::RunServer(LaunchProfile::new(validated)))
}
