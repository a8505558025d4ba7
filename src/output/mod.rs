//! Output formatting for mandato.
//!
//! Formatters for displaying analysis results, token streams, and errors
//! as colored text or machine-readable JSON.

mod json;
mod pretty;

use chrono::TimeZone;

use crate::cli::args::OutputFormat;
use crate::core::{ParsedCommand, ResolvedAction, Token};
use crate::error::MandatoError;

pub use json::{format_analysis_json, format_error_json, format_tokens_json};
pub use pretty::{format_analysis_pretty, format_tokens_pretty};

/// Format an analyzed command based on output format.
///
/// # Errors
///
/// Returns `MandatoError::Json` if JSON serialization fails.
pub fn format_analysis<Tz>(
    input: &str,
    command: &ParsedCommand,
    action: &ResolvedAction<Tz>,
    format: OutputFormat,
) -> Result<String, MandatoError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match format {
        OutputFormat::Pretty => Ok(format_analysis_pretty(command, action)),
        OutputFormat::Json => format_analysis_json(input, command, action),
    }
}

/// Format a token stream based on output format.
///
/// # Errors
///
/// Returns `MandatoError::Json` if JSON serialization fails.
pub fn format_tokens(
    input: &str,
    tokens: &[Token],
    format: OutputFormat,
) -> Result<String, MandatoError> {
    match format {
        OutputFormat::Pretty => Ok(format_tokens_pretty(tokens)),
        OutputFormat::Json => format_tokens_json(input, tokens),
    }
}
