//! Temporal resolution: a parsed date/time expression plus a reference
//! instant becomes an absolute, timezone-correct instant.
//!
//! The reference instant carries its timezone, so "today" boundaries are
//! computed against the local wall-clock date, never the UTC date, and the
//! whole stage stays a pure function of its arguments.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};

use crate::core::command::{DateExpr, ResolvedAction, TimeExpr};
use crate::core::parser::parse_command;
use crate::error::MandatoError;

/// Run the full pipeline: tokenize, parse, resolve.
///
/// # Errors
///
/// Returns a structured parse error for rejected input, or
/// `InvalidCalendarDate` when an explicit date does not exist.
pub fn analyze<Tz: TimeZone>(
    input: &str,
    now: &DateTime<Tz>,
) -> Result<ResolvedAction<Tz>, MandatoError> {
    let command = parse_command(input)?;
    let timestamp = resolve(command.date.as_ref(), command.time.as_ref(), now)?;

    Ok(ResolvedAction {
        description: command.description(),
        kind: command.kind,
        timestamp,
        has_explicit_time: command.time.is_some(),
    })
}

/// Resolve an optional date and time expression against a reference `now`.
///
/// - no date, no time: `now` unchanged (the full instant, not midnight)
/// - no date, time: today's local date at the given hour/minute
/// - date, no time: that date at 00:00
/// - date and time: combined
///
/// # Errors
///
/// Fails only when an explicit day/month/year combination does not exist
/// on the calendar, or the combined local time does not exist in the zone.
pub fn resolve<Tz: TimeZone>(
    date: Option<&DateExpr>,
    time: Option<&TimeExpr>,
    now: &DateTime<Tz>,
) -> Result<DateTime<Tz>, MandatoError> {
    if date.is_none() && time.is_none() {
        return Ok(now.clone());
    }

    let today = now.date_naive();
    let target = match date {
        None | Some(DateExpr::Today) => today,
        Some(DateExpr::Tomorrow) => today + Duration::days(1),
        Some(DateExpr::Weekday(weekday)) => next_weekday(today, *weekday),
        Some(DateExpr::Explicit { day, month, year }) => {
            let year = year.unwrap_or_else(|| now.year());
            NaiveDate::from_ymd_opt(year, *month, *day).ok_or_else(|| {
                MandatoError::InvalidCalendarDate(format!("{year:04}-{month:02}-{day:02}"))
            })?
        },
    };

    let clock = time.map_or_else(
        || NaiveTime::from_hms_opt(0, 0, 0).unwrap_or_default(),
        |t| NaiveTime::from_hms_opt(t.hour, t.minute, 0).unwrap_or_default(),
    );
    let local = NaiveDateTime::new(target, clock);

    now.timezone()
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| MandatoError::InvalidCalendarDate(format!("hora local inexistente: {local}")))
}

/// The next occurrence of `target` strictly after `today`: asking for
/// today's own weekday always lands seven days out, never today.
fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let mut delta = i64::from(target.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday());
    if delta <= 0 {
        delta += 7;
    }
    today + Duration::days(delta)
}
