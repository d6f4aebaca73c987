use std::fmt;

use thiserror::Error;

/// One required option that received no value from any source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingArgument {
    pub name: &'static str,
    pub description: &'static str,
    pub flags: &'static [&'static str],
    pub env_var: String,
}

/// A single problem found while validating resolved arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Required options without a value, in declaration order.
    MissingArguments(Vec<MissingArgument>),
    /// Nango is disabled and no `--token` was supplied.
    DirectTokenRequired,
    /// Nango is enabled but some of its environment variables are unset.
    MissingNangoVariables(Vec<&'static str>),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingArguments(missing) => {
                writeln!(f, "Error: The following required arguments are missing:")?;
                for arg in missing {
                    writeln!(f, "  - {}: {}", arg.name, arg.description)?;
                    writeln!(f, "    You can provide it using:")?;
                    writeln!(f, "     {} command line argument", arg.flags.join(" or "))?;
                    writeln!(f, "     {} environment variable", arg.env_var)?;
                }
                Ok(())
            }
            Diagnostic::DirectTokenRequired => {
                writeln!(
                    f,
                    "Error: Either provide a token or enable Nango authentication"
                )?;
                writeln!(f, "  - Use --token to provide a Monday API token directly")?;
                writeln!(
                    f,
                    "  - Use --use-nango (default) to use Nango authentication"
                )
            }
            Diagnostic::MissingNangoVariables(vars) => {
                writeln!(
                    f,
                    "Error: The following Nango environment variables are missing:"
                )?;
                for var in vars {
                    writeln!(f, "  - {var}")?;
                }
                writeln!(f, "Please set these in your .env file or environment.")
            }
        }
    }
}

/// Every diagnostic collected in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_diagnostics(.diagnostics))]
pub struct ValidationError {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationError {
    /// Names of the required options reported as missing.
    pub fn missing_arguments(&self) -> Vec<&'static str> {
        self.diagnostics
            .iter()
            .filter_map(|diagnostic| match diagnostic {
                Diagnostic::MissingArguments(missing) => {
                    Some(missing.iter().map(|arg| arg.name).collect::<Vec<_>>())
                }
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Names of the Nango variables reported as missing.
    pub fn missing_nango_variables(&self) -> Vec<&'static str> {
        self.diagnostics
            .iter()
            .filter_map(|diagnostic| match diagnostic {
                Diagnostic::MissingNangoVariables(vars) => Some(vars.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics.iter().map(ToString::to_string).collect()
}

/// Failures while fetching a connection from the Nango broker.
#[derive(Debug, Error)]
pub enum NangoError {
    #[error("Missing required Nango environment variables: {}", missing.join(", "))]
    MissingEnvironment { missing: Vec<&'static str> },
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request to Nango failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("Nango returned a body that is not valid JSON: {0}")]
    InvalidBody(#[source] reqwest::Error),
    #[error("Access token not found in credentials")]
    TokenNotFound,
}
