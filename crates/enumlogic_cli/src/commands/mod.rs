//! Command handlers for the `enumlogic` CLI.
//!
//! Each submodule implements one command. Argument helpers shared by several
//! commands live here in the module root.

use enumlogic::{DefineError, Denominator, EnumDefinition, EnumOptions, EnumValues};

mod check;
mod decode;
mod encode;
mod options;

pub use check::check_values;
pub use decode::decode_code;
pub use encode::encode_values;
pub use options::print_options;

/// Field name used for ad-hoc definitions built from command-line values.
const CLI_FIELD: &str = "value";

/// A command that cannot produce a report.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("missing {0}")]
    Missing(&'static str),

    #[error("invalid denominator `{0}`: expected a positive 32-bit integer")]
    Denominator(String),

    #[error("invalid code `{0}`: expected an integer")]
    Code(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error(transparent)]
    Define(#[from] DefineError),
}

/// Positional arguments plus the optional `--denominator=N` flag.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValueArgs {
    pub values: Vec<String>,
    pub denominator: Option<Denominator>,
}

impl ValueArgs {
    /// Split `args` into values and flags. `--` ends flag parsing.
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let mut parsed = ValueArgs::default();
        let mut flags_done = false;
        for arg in args {
            if flags_done {
                parsed.values.push(arg.clone());
            } else if arg == "--" {
                flags_done = true;
            } else if let Some(raw) = arg.strip_prefix("--denominator=") {
                let denominator = raw
                    .parse::<u32>()
                    .ok()
                    .and_then(Denominator::new)
                    .ok_or_else(|| CommandError::Denominator(raw.to_owned()))?;
                parsed.denominator = Some(denominator);
            } else if arg.starts_with("--") {
                return Err(CommandError::UnknownOption(arg.clone()));
            } else {
                parsed.values.push(arg.clone());
            }
        }
        Ok(parsed)
    }

    fn denominator(&self) -> Denominator {
        self.denominator.unwrap_or_default()
    }

    fn options(&self) -> EnumOptions {
        EnumOptions::new().denominator(self.denominator().get())
    }
}

/// Build a definition from command-line values, keeping later values on collision.
fn ad_hoc_definition(
    field: &str,
    values: EnumValues,
    options: EnumOptions,
) -> Result<EnumDefinition, CommandError> {
    tracing::debug!(field, count = values.len(), "building ad-hoc definition");
    Ok(EnumDefinition::define(field, values, options)?)
}
