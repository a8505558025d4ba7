//! JSON output formatting for mandato.
//!
//! Two envelopes: `{ success, analysis }` on success and
//! `{ success, error }` on failure, with `error.type` carrying the
//! stable kind so scripts can branch without parsing the message.

use chrono::TimeZone;
use serde_json::json;

use crate::core::{ParsedCommand, ResolvedAction, Token};
use crate::error::{ErrorKind, MandatoError};

/// Format an analyzed command as JSON.
///
/// # Errors
///
/// Returns `MandatoError::Json` if serialization fails.
pub fn format_analysis_json<Tz>(
    input: &str,
    command: &ParsedCommand,
    action: &ResolvedAction<Tz>,
) -> Result<String, MandatoError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let output = json!({
        "success": true,
        "analysis": {
            "command": input,
            "verb": command.verb,
            "kind": action.kind.as_str(),
            "description": action.description,
            "words": command.words,
            "date": command.date.map(|d| d.to_string()),
            "time": command.time.map(|t| t.to_string()),
            "timestamp": action.timestamp.to_rfc3339(),
            "has_explicit_time": action.has_explicit_time,
        }
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a token stream as JSON.
///
/// # Errors
///
/// Returns `MandatoError::Json` if serialization fails.
pub fn format_tokens_json(input: &str, tokens: &[Token]) -> Result<String, MandatoError> {
    let items: Vec<_> = tokens
        .iter()
        .map(|t| json!({ "kind": format!("{:?}", t.kind), "text": t.text }))
        .collect();
    let output = json!({
        "command": input,
        "count": items.len(),
        "tokens": items,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a failure envelope as JSON. Infallible: the payload is plain
/// strings.
#[must_use]
pub fn format_error_json(kind: ErrorKind, message: &str) -> String {
    let output = json!({
        "success": false,
        "error": {
            "type": kind.as_str(),
            "message": message,
        }
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{analyze, parse_command, tokenize};
    use chrono::{FixedOffset, TimeZone as _};

    #[test]
    fn test_analysis_envelope() {
        let zone = FixedOffset::west_opt(3 * 3600).unwrap();
        let now = zone.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
        let input = "anotá comprar leche mañana a las 10:30";
        let command = parse_command(input).unwrap();
        let action = analyze(input, &now).unwrap();

        let body = format_analysis_json(input, &command, &action).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["analysis"]["kind"], "reminder");
        assert_eq!(value["analysis"]["description"], "comprar leche");
        assert_eq!(value["analysis"]["date"], "mañana");
        assert_eq!(value["analysis"]["time"], "10:30");
        assert_eq!(value["analysis"]["has_explicit_time"], true);
        assert_eq!(
            value["analysis"]["timestamp"],
            "2024-03-11T10:30:00-03:00"
        );
    }

    #[test]
    fn test_error_envelope() {
        let err = parse_command("agendá reunión a las 25:00").unwrap_err();
        let body = format_error_json(err.kind(), &err.to_string());
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["type"], "TimeSyntaxError");
    }

    #[test]
    fn test_tokens_envelope() {
        let input = "agendá reunión hoy";
        let body = format_tokens_json(input, &tokenize(input)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["count"], 4); // includes the Eof marker
        assert_eq!(value["tokens"][0]["kind"], "Verb");
        assert_eq!(value["tokens"][0]["text"], "agendá");
    }
}
