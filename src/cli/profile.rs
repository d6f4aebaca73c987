//! LaunchProfile construction from validated options.
use super::{
    args::{DYNAMIC_API_TOOLS, MODE, READ_ONLY_MODE, VERSION},
    validate::{AuthMode, ValidatedArgs},
};

const REDACTED: &str = "<redacted>";

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub args: ValidatedArgs,
    pub launch_args: Vec<String>,
}

impl LaunchProfile {
    pub fn new(args: ValidatedArgs) -> Self {
        let launch_args = build_launch_args(&args);
        Self { args, launch_args }
    }

    pub fn auth_mode(&self) -> &AuthMode {
        self.args.auth_mode()
    }
}

/// Build launch arguments suitable for reproduction/logging. The token is
/// never included verbatim.
pub fn build_launch_args(args: &ValidatedArgs) -> Vec<String> {
    let mut launch_args = Vec::new();
    match args.auth_mode() {
        AuthMode::Nango => {
            launch_args.push("--use-nango".to_string());
            launch_args.push("true".to_string());
        }
        AuthMode::Direct { .. } => {
            launch_args.push("--use-nango".to_string());
            launch_args.push("false".to_string());
            launch_args.push("--token".to_string());
            launch_args.push(REDACTED.to_string());
        }
    }

    let flag_options = [
        ("--read-only-mode", READ_ONLY_MODE),
        ("--enable-dynamic-api-tools", DYNAMIC_API_TOOLS),
    ];
    for (flag, name) in flag_options {
        if let Some(value) = args.flag(name) {
            launch_args.push(flag.to_string());
            launch_args.push(value.to_string());
        }
    }

    for (flag, name) in [("--version", VERSION), ("--mode", MODE)] {
        if let Some(value) = args.text(name) {
            launch_args.push(flag.to_string());
            launch_args.push(value.to_string());
        }
    }

    launch_args
}
