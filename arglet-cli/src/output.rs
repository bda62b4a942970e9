//! Output rendering for the arglet CLI.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Plain,
    /// A JSON array
    Json,
}

pub fn render_tokens(tokens: &[String], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Plain => Ok(tokens.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string(tokens)?),
    }
}

pub fn render_value<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
