//! Environment variable access and `.env` loading.
use std::{collections::HashMap, env, path::PathBuf};

/// Read-only view of environment variables.
///
/// The resolver and the Nango client read through this trait so tests can
/// supply a fixed map instead of mutating the process environment.
pub trait EnvSource {
    /// Raw lookup; `None` when the variable is not set.
    fn var(&self, key: &str) -> Option<String>;

    /// Lookup that treats an empty value as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Outcome of looking for a `.env` file at startup.
#[derive(Debug)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    NotFound,
    Failed(dotenvy::Error),
}

/// Load `.env` from the working directory (or a parent) without overriding
/// variables that are already set.
///
/// Runs before tracing is initialised so `RUST_LOG` may come from the file;
/// the caller logs the returned status.
pub fn load_dotenv() -> DotenvStatus {
    match dotenvy::dotenv() {
        Ok(path) => DotenvStatus::Loaded(path),
        Err(err) if err.not_found() => DotenvStatus::NotFound,
        Err(err) => DotenvStatus::Failed(err),
    }
}
