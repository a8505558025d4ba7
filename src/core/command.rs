//! Data model for parsed and resolved agenda commands.
//!
//! Everything here is an owned value with no shared mutable state: the
//! parser produces a [`ParsedCommand`], the resolver turns it into a
//! [`ResolvedAction`] owned by the caller.

use chrono::{DateTime, TimeZone, Weekday};
use serde::Serialize;

use crate::core::token::{month_name, weekday_name};

/// What a command asks for, derived deterministically from its verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// A scheduled event (agendá).
    Event,
    /// A reminder (anotá, recordame).
    Reminder,
}

impl ActionKind {
    /// Map a canonical (accented) verb to its action kind.
    #[must_use]
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "agendá" => Some(Self::Event),
            "anotá" | "recordame" => Some(Self::Reminder),
            _ => None,
        }
    }

    /// The kind as it appears in JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Reminder => "reminder",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date expression as written, before temporal resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateExpr {
    /// "hoy".
    Today,
    /// "mañana".
    Tomorrow,
    /// A weekday name, always resolved to its next future occurrence.
    Weekday(Weekday),
    /// "15 de marzo" / "15 de marzo 2024". Day and month are not
    /// calendar-validated here: "31 de febrero" parses and fails at
    /// resolution.
    Explicit {
        day: u32,
        month: u32,
        year: Option<i32>,
    },
}

impl std::fmt::Display for DateExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Today => f.write_str("hoy"),
            Self::Tomorrow => f.write_str("mañana"),
            Self::Weekday(day) => f.write_str(weekday_name(*day)),
            Self::Explicit { day, month, year } => {
                let month = month_name(*month).unwrap_or("?");
                match year {
                    Some(year) => write!(f, "{day} de {month} {year}"),
                    None => write!(f, "{day} de {month}"),
                }
            },
        }
    }
}

/// Period-of-day marker (am/pm/hs).
///
/// Informational only: the grammar's 24-hour value is authoritative and
/// the resolver never shifts the hour by the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodMarker {
    /// Before noon.
    Am,
    /// After noon.
    Pm,
    /// "hs" / "horas".
    Hs,
}

impl PeriodMarker {
    /// Parse a lowercased marker word.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "am" => Some(Self::Am),
            "pm" => Some(Self::Pm),
            "hs" | "horas" => Some(Self::Hs),
            _ => None,
        }
    }

    /// The marker as written in output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Am => "am",
            Self::Pm => "pm",
            Self::Hs => "hs",
        }
    }
}

/// A clock time as written. Hour and minute are range-checked by the
/// parser (0-23 / 0-59), not deferred to resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeExpr {
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59; 0 when the command gives only an hour.
    pub minute: u32,
    /// Optional period marker.
    pub period: Option<PeriodMarker>,
}

impl TimeExpr {
    /// A time with no minutes or marker.
    #[must_use]
    pub const fn on_the_hour(hour: u32) -> Self {
        Self {
            hour,
            minute: 0,
            period: None,
        }
    }
}

impl std::fmt::Display for TimeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)?;
        if let Some(period) = self.period {
            write!(f, " {}", period.as_str())?;
        }
        Ok(())
    }
}

/// Output of the grammar parser: one fully recognized command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The canonical (accented) verb form.
    pub verb: String,
    /// Event or reminder, derived from the verb.
    pub kind: ActionKind,
    /// Description words in input order; never empty.
    pub words: Vec<String>,
    /// Optional date expression.
    pub date: Option<DateExpr>,
    /// Optional time expression.
    pub time: Option<TimeExpr>,
}

impl ParsedCommand {
    /// The description text, words joined by single spaces.
    #[must_use]
    pub fn description(&self) -> String {
        self.words.join(" ")
    }
}

/// The final, timezone-correct record consumed by the caller.
#[derive(Debug, Clone)]
pub struct ResolvedAction<Tz: TimeZone> {
    /// Human description of the event or reminder.
    pub description: String,
    /// Event or reminder.
    pub kind: ActionKind,
    /// Absolute instant in the caller's timezone.
    pub timestamp: DateTime<Tz>,
    /// Whether the command carried an explicit clock time.
    pub has_explicit_time: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_verb() {
        assert_eq!(ActionKind::from_verb("agendá"), Some(ActionKind::Event));
        assert_eq!(ActionKind::from_verb("anotá"), Some(ActionKind::Reminder));
        assert_eq!(ActionKind::from_verb("recordame"), Some(ActionKind::Reminder));
        assert_eq!(ActionKind::from_verb("agenda"), None); // not canonical
    }

    #[test]
    fn test_date_expr_display() {
        let with_year = DateExpr::Explicit {
            day: 15,
            month: 3,
            year: Some(2024),
        };
        assert_eq!(with_year.to_string(), "15 de marzo 2024");

        let without_year = DateExpr::Explicit {
            day: 1,
            month: 12,
            year: None,
        };
        assert_eq!(without_year.to_string(), "1 de diciembre");
        assert_eq!(DateExpr::Weekday(Weekday::Wed).to_string(), "miércoles");
    }

    #[test]
    fn test_time_expr_display() {
        assert_eq!(TimeExpr::on_the_hour(9).to_string(), "09:00");
        let with_marker = TimeExpr {
            hour: 10,
            minute: 30,
            period: Some(PeriodMarker::Pm),
        };
        assert_eq!(with_marker.to_string(), "10:30 pm");
    }
}
