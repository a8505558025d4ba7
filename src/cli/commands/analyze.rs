//! The analyze command: full pipeline over one input string.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::Config;
use crate::core::{parse_command, resolve, ResolvedAction};
use crate::error::MandatoError;
use crate::output::format_analysis;

/// Run the analyzer and format the result.
///
/// # Errors
///
/// Returns the structured parse/resolution error for rejected commands,
/// or a config error for a bad offset or reference instant.
pub fn analyze(args: &AnalyzeArgs, config: &Config, format: OutputFormat) -> Result<String, MandatoError> {
    let offset = match args.offset {
        Some(hours) => hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| MandatoError::Config(format!("Invalid UTC offset: {hours} hours")))?,
        None => config.offset()?,
    };

    let now = match &args.now {
        Some(text) => parse_reference_instant(text, offset)?,
        None => Utc::now().with_timezone(&offset),
    };

    let command = parse_command(&args.command)?;
    let timestamp = resolve(command.date.as_ref(), command.time.as_ref(), &now)?;
    let action = ResolvedAction {
        description: command.description(),
        kind: command.kind,
        timestamp,
        has_explicit_time: command.time.is_some(),
    };

    format_analysis(&args.command, &command, &action, format)
}

/// Parse `--now`: full RFC 3339, or a naive date-time pinned to `offset`.
fn parse_reference_instant(
    text: &str,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, MandatoError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant);
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            if let Some(instant) = offset.from_local_datetime(&naive).earliest() {
                return Ok(instant);
            }
        }
    }

    Err(MandatoError::Config(format!(
        "Invalid reference instant: '{text}' (expected RFC 3339 or YYYY-MM-DDTHH:MM)"
    )))
}
