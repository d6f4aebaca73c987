//! Option descriptors and `--help` rendering.
use clap::{Arg, ArgAction, Command};

/// Prefix for the environment variable backing each option.
pub const ENV_PREFIX: &str = "MONDAY_";

pub const TOKEN: &str = "token";
pub const VERSION: &str = "version";
pub const READ_ONLY_MODE: &str = "readOnlyMode";
pub const DYNAMIC_API_TOOLS: &str = "enableDynamicApiTools";
pub const MODE: &str = "mode";
pub const USE_NANGO: &str = "useNango";

/// Declared default of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Bool(bool),
    Str(&'static str),
}

impl DefaultValue {
    /// String form used when the default fills an unset option.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DefaultValue::Bool(true) => "true",
            DefaultValue::Bool(false) => "false",
            DefaultValue::Str(value) => *value,
        }
    }
}

/// Static definition of one configuration option.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub flags: &'static [&'static str],
    pub description: &'static str,
    pub required: bool,
    pub default: Option<DefaultValue>,
}

impl ArgSpec {
    /// `MONDAY_` followed by the upper-cased option name.
    pub fn env_var(&self) -> String {
        format!("{ENV_PREFIX}{}", self.name.to_uppercase())
    }

    pub fn has_bool_default(&self) -> bool {
        matches!(self.default, Some(DefaultValue::Bool(_)))
    }
}

/// Options recognised by the launcher, in resolution order.
pub const ARG_SPECS: &[ArgSpec] = &[
    ArgSpec {
        name: TOKEN,
        flags: &["--token", "-t"],
        description: "monday.com API token (required when Nango is disabled)",
        required: false,
        default: None,
    },
    ArgSpec {
        name: VERSION,
        flags: &["--version", "-v"],
        description: "monday.com API version",
        required: false,
        default: None,
    },
    ArgSpec {
        name: READ_ONLY_MODE,
        flags: &["--read-only-mode", "-ro"],
        description: "Expose only read-only tools",
        required: false,
        default: Some(DefaultValue::Bool(false)),
    },
    ArgSpec {
        name: DYNAMIC_API_TOOLS,
        flags: &["--enable-dynamic-api-tools", "-edat"],
        description: "Enable dynamic API tools: true, false, or only",
        required: false,
        default: Some(DefaultValue::Bool(false)),
    },
    ArgSpec {
        name: MODE,
        flags: &["--mode", "-m"],
        description: "Tool selection mode: \"api\" for monday API tools, \"apps\" for monday apps tools",
        required: false,
        default: Some(DefaultValue::Str("api")),
    },
    ArgSpec {
        name: USE_NANGO,
        flags: &["--use-nango", "-n"],
        description: "Fetch the API token from Nango instead of --token",
        required: false,
        default: Some(DefaultValue::Bool(true)),
    },
];

/// True when `--help` or `-h` appears outside a flag's value position.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().enumerate().any(|(index, arg)| {
        let is_help = arg == "--help" || arg == "-h";
        let is_value = index
            .checked_sub(1)
            .is_some_and(|previous| is_known_flag(&args[previous]));
        is_help && !is_value
    })
}

fn is_known_flag(arg: &str) -> bool {
    ARG_SPECS
        .iter()
        .any(|spec| spec.flags.iter().any(|flag| *flag == arg))
}

/// Build a `clap` command mirroring the descriptor table for help output.
///
/// Resolution itself does not go through clap: flags may appear in any
/// position, unknown arguments are ignored and the first occurrence wins.
pub fn help_command(specs: &[ArgSpec]) -> Command {
    let mut command = Command::new(env!("CARGO_PKG_NAME"))
        .about("monday.com MCP server over stdio (direct token or Nango authentication)")
        .disable_version_flag(true)
        .after_help(
            "Nango authentication reads NANGO_CONNECTION_ID, NANGO_INTEGRATION_ID, NANGO_BASE_URL and NANGO_SECRET_KEY.\nVariables may also be placed in a .env file.",
        );

    for spec in specs {
        let mut arg = Arg::new(spec.name)
            .value_name("VALUE")
            .action(ArgAction::Set)
            .required(false);

        let mut other_spellings = Vec::new();
        for &flag in spec.flags {
            if let Some(long) = flag.strip_prefix("--") {
                arg = arg.long(long);
                continue;
            }
            let mut chars = flag.trim_start_matches('-').chars();
            match (chars.next(), chars.next()) {
                (Some(short), None) => arg = arg.short(short),
                _ => other_spellings.push(flag),
            }
        }

        let mut help = format!("{} [env: {}]", spec.description, spec.env_var());
        if !other_spellings.is_empty() {
            help.push_str(&format!(" [also: {}]", other_spellings.join(", ")));
        }
        if spec.required {
            help.push_str(" [required]");
        }
        arg = arg.help(help);
        if let Some(default) = spec.default {
            arg = arg.default_value(default.as_str());
        }
        command = command.arg(arg);
    }

    command
}

/// Rendered help text for the shipped descriptor table.
pub fn render_help() -> String {
    help_command(ARG_SPECS).render_long_help().to_string()
}
