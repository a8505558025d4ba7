//! Recursive-descent parser for the agenda command grammar.
//!
//! # Grammar
//!
//! ```text
//! Command := Verb Words TimeExpr? EOF
//! Verb    := agendá | anotá | recordame       (case- and accent-insensitive)
//! Words   := Word { Word }                    (stops before a TimeExpr starter)
//! TimeExpr:= (Date Time?) | Time
//! Date    := hoy | mañana | Weekday | Number "de" Month ("de"? Year)?
//! Time    := "a las" Number (":" Minutes)? Period?
//! ```
//!
//! Optional productions (date, time) run behind an explicit position
//! snapshot: a failed attempt restores the cursor exactly, so the tokens
//! either fall through to the next production or surface verbatim in a
//! trailing-tokens error. Two prefixes commit the parser: after "a las"
//! any malformed or out-of-range time is a hard time error, and after
//! `Number "de"` a missing month is a hard date error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::command::{ActionKind, DateExpr, ParsedCommand, PeriodMarker, TimeExpr};
use crate::core::lexer::tokenize;
use crate::core::token::{canonical_verb, month_number, weekday_from_name, Token, TokenKind};
use crate::error::MandatoError;

// Digit run glued to a period marker, e.g. "10am".
static ATTACHED_PERIOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(\d{1,2})(am|pm|hs|horas)$")
        .unwrap_or_else(|e| panic!("Invalid period regex: {e}"))
});

static EOF_TOKEN: Token = Token::eof();

/// Tokenize and parse a raw command string.
///
/// # Errors
///
/// Returns the structured parse error for any rejected input; see
/// [`crate::ErrorKind`] for the taxonomy.
pub fn parse_command(input: &str) -> Result<ParsedCommand, MandatoError> {
    parse_tokens(&tokenize(input))
}

/// Parse an already-tokenized command.
///
/// # Errors
///
/// Returns the structured parse error for any rejected input.
pub fn parse_tokens(tokens: &[Token]) -> Result<ParsedCommand, MandatoError> {
    Parser::new(tokens).parse()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    /// Consume the current token, returning its lexeme.
    fn bump(&mut self) -> String {
        let text = self.peek().text.clone();
        self.pos += 1;
        text
    }

    fn parse(&mut self) -> Result<ParsedCommand, MandatoError> {
        if self.peek().kind == TokenKind::Eof {
            return Err(MandatoError::EmptyCommand);
        }

        let (verb, kind) = self.parse_verb()?;
        let words = self.parse_words()?;
        let (date, time) = self.parse_time_expr()?;
        self.expect_end()?;

        Ok(ParsedCommand {
            verb,
            kind,
            words,
            date,
            time,
        })
    }

    /// Verb := agendá | anotá | recordame, any casing, accented or not.
    /// The canonical accented form is what classification switches on.
    fn parse_verb(&mut self) -> Result<(String, ActionKind), MandatoError> {
        let text = self.peek().text.clone();
        let canonical = canonical_verb(&text)
            .ok_or_else(|| MandatoError::InvalidVerb(text.clone()))?;
        let kind = ActionKind::from_verb(canonical)
            .ok_or_else(|| MandatoError::InvalidVerb(text))?;
        self.pos += 1;
        Ok((canonical.to_string(), kind))
    }

    /// Words := Word { Word }. Greedy; stops before any token that can
    /// begin a `TimeExpr` (relative date, weekday, number, "a las"), which
    /// is implicit here because those kinds are never word-like.
    fn parse_words(&mut self) -> Result<Vec<String>, MandatoError> {
        let first = self.peek();
        if !is_word_like(first.kind) {
            return Err(match first.kind {
                TokenKind::Illegal => MandatoError::InvalidWord(first.text.clone()),
                _ => MandatoError::MissingWords,
            });
        }

        let mut words = vec![self.bump()];
        while is_word_like(self.peek().kind) {
            words.push(self.bump());
        }
        Ok(words)
    }

    /// TimeExpr := (Date Time?) | Time | ε — absence is not an error.
    fn parse_time_expr(
        &mut self,
    ) -> Result<(Option<DateExpr>, Option<TimeExpr>), MandatoError> {
        if let Some(date) = self.try_date()? {
            let time = self.try_time()?;
            return Ok((Some(date), time));
        }
        let time = self.try_time()?;
        Ok((None, time))
    }

    fn try_date(&mut self) -> Result<Option<DateExpr>, MandatoError> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::RelativeDate => {
                self.pos += 1;
                if token.text.to_lowercase() == "hoy" {
                    Ok(Some(DateExpr::Today))
                } else {
                    Ok(Some(DateExpr::Tomorrow))
                }
            },
            TokenKind::Weekday => {
                let Some(weekday) = weekday_from_name(&token.text.to_lowercase()) else {
                    return Ok(None);
                };
                self.pos += 1;
                Ok(Some(DateExpr::Weekday(weekday)))
            },
            TokenKind::Number => self.try_explicit_date(),
            _ => Ok(None),
        }
    }

    /// Number "de" Month ("de"? Year)? — a missing "de" after the day fails
    /// the whole attempt with the position restored; past "de" the month is
    /// mandatory.
    fn try_explicit_date(&mut self) -> Result<Option<DateExpr>, MandatoError> {
        let snapshot = self.pos;

        let Ok(day) = self.peek().text.parse::<u32>() else {
            return Ok(None);
        };
        self.pos += 1;

        if self.peek().kind != TokenKind::De {
            self.pos = snapshot;
            return Ok(None);
        }
        self.pos += 1;

        let month_token = self.peek().clone();
        if month_token.kind != TokenKind::Month {
            return Err(MandatoError::DateSyntax(format!(
                "se esperaba un mes después de 'de', se encontró '{}'",
                display_token(&month_token),
            )));
        }
        let month = month_number(&month_token.text.to_lowercase()).ok_or_else(|| {
            MandatoError::DateSyntax(format!("mes desconocido: '{}'", month_token.text))
        })?;
        self.pos += 1;

        let year = self.try_year();
        Ok(Some(DateExpr::Explicit { day, month, year }))
    }

    /// Optional 4-digit year, optionally introduced by a second "de".
    /// Anything else leaves the position untouched; the resolver defaults
    /// to the current year.
    fn try_year(&mut self) -> Option<i32> {
        let snapshot = self.pos;
        if self.peek().kind == TokenKind::De {
            self.pos += 1;
        }

        let token = self.peek();
        if token.kind == TokenKind::Number && token.text.len() == 4 {
            if let Ok(year) = token.text.parse::<i32>() {
                self.pos += 1;
                return Some(year);
            }
        }

        self.pos = snapshot;
        None
    }

    /// Time := "a las" Number (":" Minutes)? Period?. Without the "a las"
    /// prefix this fails softly; with it, the parser is committed and every
    /// malformed or out-of-range component is a hard time error.
    fn try_time(&mut self) -> Result<Option<TimeExpr>, MandatoError> {
        if self.peek().kind != TokenKind::ALas {
            return Ok(None);
        }
        self.pos += 1;

        let token = self.peek().clone();
        let mut time = match token.kind {
            TokenKind::Number => {
                let hour = token.text.parse::<u32>().map_err(|_| {
                    MandatoError::TimeSyntax(format!("hora ilegible: '{}'", token.text))
                })?;
                if hour > 23 {
                    return Err(MandatoError::TimeSyntax(format!(
                        "hora fuera de rango: {hour}"
                    )));
                }
                self.pos += 1;

                let minute = if self.peek().kind == TokenKind::Colon {
                    self.pos += 1;
                    self.parse_minutes()?
                } else {
                    0
                };

                TimeExpr {
                    hour,
                    minute,
                    period: None,
                }
            },
            // "10am": the lexer fused the digits and the marker.
            TokenKind::Period => {
                let Some(caps) = ATTACHED_PERIOD.captures(&token.text) else {
                    return Err(MandatoError::TimeSyntax(format!(
                        "se esperaba una hora después de 'a las', se encontró '{}'",
                        token.text
                    )));
                };
                let hour = caps[1].parse::<u32>().map_err(|_| {
                    MandatoError::TimeSyntax(format!("hora ilegible: '{}'", token.text))
                })?;
                if hour > 23 {
                    return Err(MandatoError::TimeSyntax(format!(
                        "hora fuera de rango: {hour}"
                    )));
                }
                self.pos += 1;
                TimeExpr {
                    hour,
                    minute: 0,
                    period: PeriodMarker::from_word(&caps[2].to_lowercase()),
                }
            },
            _ => {
                return Err(MandatoError::TimeSyntax(format!(
                    "se esperaba una hora después de 'a las', se encontró '{}'",
                    display_token(&token)
                )))
            },
        };

        // Optional standalone marker right after the time: "a las 10 pm".
        if time.period.is_none() && self.peek().kind == TokenKind::Period {
            if let Some(marker) = PeriodMarker::from_word(&self.peek().text.to_lowercase()) {
                time.period = Some(marker);
                self.pos += 1;
            }
        }

        Ok(Some(time))
    }

    /// Minutes := exactly two digits, 0-59, directly after the colon.
    fn parse_minutes(&mut self) -> Result<u32, MandatoError> {
        let token = self.peek().clone();
        if token.kind != TokenKind::Number {
            return Err(MandatoError::TimeSyntax(format!(
                "se esperaban minutos después de ':', se encontró '{}'",
                display_token(&token)
            )));
        }
        if token.text.len() != 2 {
            return Err(MandatoError::TimeSyntax(format!(
                "los minutos deben tener 2 dígitos: '{}'",
                token.text
            )));
        }
        let minute = token.text.parse::<u32>().map_err(|_| {
            MandatoError::TimeSyntax(format!("minutos ilegibles: '{}'", token.text))
        })?;
        if minute > 59 {
            return Err(MandatoError::TimeSyntax(format!(
                "minutos fuera de rango: {minute}"
            )));
        }
        self.pos += 1;
        Ok(minute)
    }

    /// After all productions, anything but `Eof` is a trailing-tokens error
    /// naming the leftovers verbatim.
    fn expect_end(&self) -> Result<(), MandatoError> {
        if self.peek().kind == TokenKind::Eof {
            return Ok(());
        }
        let rest = self.tokens[self.pos..]
            .iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Err(MandatoError::TrailingTokens(rest))
    }
}

/// Kinds the description may contain. Connectors and event nouns read as
/// plain words there; the kinds that can open a `TimeExpr` never do.
const fn is_word_like(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Word | TokenKind::EventNoun | TokenKind::De | TokenKind::Con | TokenKind::Month
    )
}

/// Human-readable form of a token for error messages.
fn display_token(token: &Token) -> &str {
    if token.kind == TokenKind::Eof {
        "fin de la entrada"
    } else {
        &token.text
    }
}
