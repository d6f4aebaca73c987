//! Flag > environment > default resolution of option values.
use std::collections::BTreeMap;

use super::args::{ArgSpec, ARG_SPECS};
use crate::lib::env::EnvSource;

/// One tier of the resolution chain.
pub trait ValueSource {
    fn lookup(&self, spec: &ArgSpec) -> Option<String>;
}

/// Command-line flags; the first spelling found with a following element wins.
#[derive(Debug, Clone, Copy)]
pub struct FlagSource<'a> {
    args: &'a [String],
}

impl<'a> FlagSource<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self { args }
    }
}

impl ValueSource for FlagSource<'_> {
    fn lookup(&self, spec: &ArgSpec) -> Option<String> {
        spec.flags.iter().find_map(|flag| {
            let index = self.args.iter().position(|arg| arg == flag)?;
            self.args.get(index + 1).cloned()
        })
    }
}

/// `MONDAY_<NAME>` environment variables; empty values are skipped.
pub struct EnvVarSource<'a, E: ?Sized> {
    env: &'a E,
}

impl<'a, E: EnvSource + ?Sized> EnvVarSource<'a, E> {
    pub fn new(env: &'a E) -> Self {
        Self { env }
    }
}

impl<E: EnvSource + ?Sized> ValueSource for EnvVarSource<'_, E> {
    fn lookup(&self, spec: &ArgSpec) -> Option<String> {
        self.env.non_empty(&spec.env_var())
    }
}

/// Declared defaults, stringified.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSource;

impl ValueSource for DefaultSource {
    fn lookup(&self, spec: &ArgSpec) -> Option<String> {
        spec.default.map(|default| default.as_str().to_string())
    }
}

/// Raw option values keyed by option name. Unset options have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    values: BTreeMap<&'static str, String>,
}

impl ParsedArgs {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// Resolve the shipped options from `args` and `env`.
pub fn parse_args<E: EnvSource + ?Sized>(args: &[String], env: &E) -> ParsedArgs {
    parse_args_with(ARG_SPECS, args, env)
}

/// Resolve `specs` in declaration order, consulting flags, then the
/// environment, then defaults.
pub fn parse_args_with<E: EnvSource + ?Sized>(
    specs: &[ArgSpec],
    args: &[String],
    env: &E,
) -> ParsedArgs {
    let flags = FlagSource::new(args);
    let env_vars = EnvVarSource::new(env);
    let defaults = DefaultSource;
    let chain: [&dyn ValueSource; 3] = [&flags, &env_vars, &defaults];

    let mut parsed = ParsedArgs::default();
    for spec in specs {
        if let Some(value) = chain.iter().find_map(|source| source.lookup(spec)) {
            parsed.insert(spec.name, value);
        }
    }
    parsed
}
