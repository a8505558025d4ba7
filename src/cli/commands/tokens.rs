//! The tokens command: lexical scan only.

use crate::cli::args::{OutputFormat, TokensArgs};
use crate::core::tokenize;
use crate::error::MandatoError;
use crate::output::format_tokens;

/// Tokenize the input and format the stream.
///
/// # Errors
///
/// Returns `MandatoError::Json` if JSON serialization fails; tokenizing
/// itself is total and never fails.
pub fn tokens(args: &TokensArgs, format: OutputFormat) -> Result<String, MandatoError> {
    let tokens = tokenize(&args.command);
    format_tokens(&args.command, &tokens, format)
}
