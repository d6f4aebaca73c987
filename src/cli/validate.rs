//! Cross-field validation and type coercion of resolved options.
use std::{collections::BTreeMap, fmt};

use super::{
    args::{ArgSpec, ARG_SPECS, DYNAMIC_API_TOOLS, MODE, READ_ONLY_MODE, TOKEN, USE_NANGO, VERSION},
    resolve::ParsedArgs,
};
use crate::{
    lib::{
        env::EnvSource,
        errors::{Diagnostic, MissingArgument, ValidationError},
    },
    server::nango,
};

/// Value of an option with a boolean default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    /// `enableDynamicApiTools=only`: expose the dynamic API tools exclusively.
    Only,
}

impl FlagValue {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FlagValue::Bool(true) => "true",
            FlagValue::Bool(false) => "false",
            FlagValue::Only => "only",
        }
    }

    pub const fn is_enabled(&self) -> bool {
        !matches!(self, FlagValue::Bool(false))
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Text(String),
    Flag(FlagValue),
}

impl ArgValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArgValue::Text(value) => Some(value),
            ArgValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<FlagValue> {
        match self {
            ArgValue::Flag(value) => Some(*value),
            ArgValue::Text(_) => None,
        }
    }
}

/// Where the monday.com API token comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Fetch a fresh token from Nango.
    Nango,
    /// Use the token given on the command line or in `MONDAY_TOKEN`.
    Direct { token: String },
}

impl AuthMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Nango => "nango",
            AuthMode::Direct { .. } => "direct",
        }
    }
}

impl fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Nango => f.write_str("Nango"),
            AuthMode::Direct { .. } => f.write_str("Direct { token: <redacted> }"),
        }
    }
}

/// Options after validation. Every required option has a value and the
/// authentication mode is usable.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedArgs {
    values: BTreeMap<&'static str, ArgValue>,
    auth: AuthMode,
}

impl fmt::Debug for ValidatedArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: BTreeMap<&str, &dyn fmt::Debug> = self
            .values
            .iter()
            .map(|(name, value)| {
                let shown: &dyn fmt::Debug = if *name == TOKEN { &"<redacted>" } else { value };
                (*name, shown)
            })
            .collect();
        f.debug_struct("ValidatedArgs")
            .field("values", &values)
            .field("auth", &self.auth)
            .finish()
    }
}

impl ValidatedArgs {
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ArgValue::as_text)
    }

    pub fn flag(&self, name: &str) -> Option<FlagValue> {
        self.get(name).and_then(ArgValue::as_flag)
    }

    pub fn auth_mode(&self) -> &AuthMode {
        &self.auth
    }

    pub fn token(&self) -> Option<&str> {
        self.text(TOKEN)
    }

    pub fn api_version(&self) -> Option<&str> {
        self.text(VERSION)
    }

    pub fn mode(&self) -> Option<&str> {
        self.text(MODE)
    }

    pub fn read_only_mode(&self) -> bool {
        self.flag(READ_ONLY_MODE) == Some(FlagValue::Bool(true))
    }

    pub fn dynamic_api_tools(&self) -> FlagValue {
        self.flag(DYNAMIC_API_TOOLS).unwrap_or(FlagValue::Bool(false))
    }

    /// Coerced `useNango`; the auth decision itself lives in [`Self::auth_mode`].
    pub fn use_nango(&self) -> Option<FlagValue> {
        self.flag(USE_NANGO)
    }
}

/// Validate the shipped options.
pub fn validate_args<E: EnvSource + ?Sized>(
    parsed: &ParsedArgs,
    env: &E,
) -> Result<ValidatedArgs, ValidationError> {
    validate_args_with(ARG_SPECS, parsed, env)
}

/// Run every check, collecting all diagnostics before failing.
pub fn validate_args_with<E: EnvSource + ?Sized>(
    specs: &[ArgSpec],
    parsed: &ParsedArgs,
    env: &E,
) -> Result<ValidatedArgs, ValidationError> {
    let mut diagnostics = Vec::new();

    let missing: Vec<MissingArgument> = specs
        .iter()
        .filter(|spec| spec.required && parsed.get(spec.name).map_or(true, str::is_empty))
        .map(|spec| MissingArgument {
            name: spec.name,
            description: spec.description,
            flags: spec.flags,
            env_var: spec.env_var(),
        })
        .collect();
    if !missing.is_empty() {
        diagnostics.push(Diagnostic::MissingArguments(missing));
    }

    // Validation treats only the literal "false" as opting out of Nango.
    let delegated = parsed.get(USE_NANGO) != Some("false");
    // The auth mode follows the coerced flag, so "FALSE" with a token is direct.
    let nango_enabled = parsed
        .get(USE_NANGO)
        .map_or(true, |raw| coerce_flag(USE_NANGO, raw).is_enabled());
    let direct = parsed
        .get(TOKEN)
        .filter(|token| !token.is_empty())
        .map(|token| AuthMode::Direct {
            token: token.to_string(),
        });
    let auth = match direct {
        _ if nango_enabled => Some(AuthMode::Nango),
        Some(direct) => Some(direct),
        // Nango variables were checked above, so fall back to them.
        None if delegated => Some(AuthMode::Nango),
        None => None,
    };

    if auth.is_none() {
        diagnostics.push(Diagnostic::DirectTokenRequired);
    }

    if delegated {
        let missing_vars = nango::missing_env_vars(env);
        if !missing_vars.is_empty() {
            diagnostics.push(Diagnostic::MissingNangoVariables(missing_vars));
        }
    }

    match auth {
        Some(auth) if diagnostics.is_empty() => Ok(ValidatedArgs {
            values: coerce(specs, parsed),
            auth,
        }),
        _ => Err(ValidationError { diagnostics }),
    }
}

fn coerce(specs: &[ArgSpec], parsed: &ParsedArgs) -> BTreeMap<&'static str, ArgValue> {
    specs
        .iter()
        .filter_map(|spec| {
            let raw = parsed.get(spec.name)?;
            let value = if spec.has_bool_default() {
                ArgValue::Flag(coerce_flag(spec.name, raw))
            } else {
                ArgValue::Text(raw.to_string())
            };
            Some((spec.name, value))
        })
        .collect()
}

/// Case-insensitive `"true"` is on, anything else is off, except that
/// `enableDynamicApiTools` also accepts `"only"`.
pub fn coerce_flag(name: &str, raw: &str) -> FlagValue {
    if name == DYNAMIC_API_TOOLS && raw.eq_ignore_ascii_case("only") {
        return FlagValue::Only;
    }
    FlagValue::Bool(raw.eq_ignore_ascii_case("true"))
}
