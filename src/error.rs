//! Error types for mandato.
//!
//! Every rejected command maps to one stable [`ErrorKind`] so callers
//! (the CLI here, a service layer elsewhere) can branch on the kind while
//! showing the human-readable message as-is.

use serde::Serialize;
use thiserror::Error;

/// Errors produced by the command analyzer and the surrounding shell.
#[derive(Debug, Error)]
pub enum MandatoError {
    /// The input was empty or contained only whitespace.
    #[error("comando vacío")]
    EmptyCommand,

    /// The leading token is not one of the three accepted verbs.
    #[error("verbo inválido: '{0}'. Esperado: agendá, anotá, recordame")]
    InvalidVerb(String),

    /// A token in word position contains characters outside the Spanish alphabet.
    #[error("palabra inválida: '{0}'")]
    InvalidWord(String),

    /// The command has a verb but no description words.
    #[error("se esperaba una palabra después del verbo")]
    MissingWords,

    /// A date production failed after the parser had committed to it.
    #[error("fecha inválida: {0}")]
    DateSyntax(String),

    /// A time production failed after "a las" had matched.
    #[error("hora inválida: {0}")]
    TimeSyntax(String),

    /// Tokens remained after all productions were attempted.
    #[error("tokens inesperados al final: {0}")]
    TrailingTokens(String),

    /// A syntactically valid date that does not exist on the calendar.
    #[error("fecha inexistente en el calendario: {0}")]
    InvalidCalendarDate(String),

    /// Configuration loading or validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML config file error.
    #[error("Config file error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Stable, machine-readable error kinds for the analyzer contract.
///
/// These names are part of the JSON output (`error.type`) and must not
/// change between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// Empty or whitespace-only command.
    EmptyCommand,
    /// Unrecognized leading verb.
    InvalidVerb,
    /// Malformed word in the description.
    InvalidWord,
    /// No description words after the verb.
    MissingWords,
    /// Malformed explicit date.
    DateSyntaxError,
    /// Malformed or out-of-range time.
    TimeSyntaxError,
    /// Unconsumed tokens after the grammar was satisfied.
    TrailingTokens,
    /// Date components that do not form a real calendar date.
    InvalidCalendarDate,
    /// Anything outside the analyzer contract (I/O, config, serialization).
    Other,
}

impl MandatoError {
    /// The stable kind for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCommand => ErrorKind::EmptyCommand,
            Self::InvalidVerb(_) => ErrorKind::InvalidVerb,
            Self::InvalidWord(_) => ErrorKind::InvalidWord,
            Self::MissingWords => ErrorKind::MissingWords,
            Self::DateSyntax(_) => ErrorKind::DateSyntaxError,
            Self::TimeSyntax(_) => ErrorKind::TimeSyntaxError,
            Self::TrailingTokens(_) => ErrorKind::TrailingTokens,
            Self::InvalidCalendarDate(_) => ErrorKind::InvalidCalendarDate,
            Self::Config(_) | Self::Io(_) | Self::Json(_) | Self::Yaml(_) => ErrorKind::Other,
        }
    }
}

impl ErrorKind {
    /// The kind as it appears in JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyCommand => "EmptyCommand",
            Self::InvalidVerb => "InvalidVerb",
            Self::InvalidWord => "InvalidWord",
            Self::MissingWords => "MissingWords",
            Self::DateSyntaxError => "DateSyntaxError",
            Self::TimeSyntaxError => "TimeSyntaxError",
            Self::TrailingTokens => "TrailingTokens",
            Self::InvalidCalendarDate => "InvalidCalendarDate",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
