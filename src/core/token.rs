//! Token definitions and the Spanish keyword vocabulary.
//!
//! The vocabulary is fixed and small, so every category is a closed set
//! behind a single lookup function; no dynamic registration exists.

use chrono::Weekday;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Unrecognized character sequence.
    Illegal,
    /// End of input.
    Eof,
    /// agendá / anotá / recordame (any casing, accented or not).
    Verb,
    /// Event-type noun: reunión, cita, encuentro, junta, sesión, entrevista.
    EventNoun,
    /// Any other alphabetic word.
    Word,
    /// The connector "de".
    De,
    /// The connector "con".
    Con,
    /// hoy / mañana.
    RelativeDate,
    /// lunes .. domingo.
    Weekday,
    /// enero .. diciembre.
    Month,
    /// The joined two-word marker "a las".
    ALas,
    /// A run of digits.
    Number,
    /// The ':' separating hours from minutes.
    Colon,
    /// am/pm/hs/horas, standalone or attached to a digit run ("10am").
    Period,
}

/// A classified lexical unit. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category.
    pub kind: TokenKind,
    /// The original lexeme, casing preserved.
    pub text: String,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-input marker.
    #[must_use]
    pub const fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
        }
    }
}

/// Lowercase a word and strip the acute accents used in Spanish verbs.
///
/// "Agendá" and "agenda" normalize to the same string; ñ and ü are kept
/// since they are distinct letters, not diacritic variants.
#[must_use]
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

/// Map a word to its canonical (accented) verb form, if it is a verb.
#[must_use]
pub fn canonical_verb(word: &str) -> Option<&'static str> {
    match normalize(word).as_str() {
        "agenda" => Some("agendá"),
        "anota" => Some("anotá"),
        "recordame" => Some("recordame"),
        _ => None,
    }
}

/// Classify a single word against the keyword sets.
///
/// Precedence: verbs, event nouns, relative dates, weekdays, months,
/// connectors, period markers; anything else is a generic word. The
/// two-word "a las" marker is handled by the lexer's lookahead, not here.
#[must_use]
pub fn classify_word(word: &str) -> TokenKind {
    if canonical_verb(word).is_some() {
        return TokenKind::Verb;
    }

    let lower = word.to_lowercase();
    if is_event_noun(&lower) {
        return TokenKind::EventNoun;
    }
    if matches!(lower.as_str(), "hoy" | "mañana" | "manana") {
        return TokenKind::RelativeDate;
    }
    if weekday_from_name(&lower).is_some() {
        return TokenKind::Weekday;
    }
    if month_number(&lower).is_some() {
        return TokenKind::Month;
    }
    match lower.as_str() {
        "de" => TokenKind::De,
        "con" => TokenKind::Con,
        _ if is_period_word(&lower) => TokenKind::Period,
        _ => TokenKind::Word,
    }
}

/// Whether a lowercased word names an event type.
fn is_event_noun(word: &str) -> bool {
    matches!(
        word,
        "reunión"
            | "reunion"
            | "cita"
            | "encuentro"
            | "junta"
            | "sesión"
            | "sesion"
            | "entrevista"
    )
}

/// Whether a lowercased word is a period-of-day marker.
#[must_use]
pub fn is_period_word(word: &str) -> bool {
    matches!(word, "am" | "pm" | "hs" | "horas")
}

/// Parse a lowercased Spanish month name to its 1-12 number.
#[must_use]
pub fn month_number(name: &str) -> Option<u32> {
    match name {
        "enero" => Some(1),
        "febrero" => Some(2),
        "marzo" => Some(3),
        "abril" => Some(4),
        "mayo" => Some(5),
        "junio" => Some(6),
        "julio" => Some(7),
        "agosto" => Some(8),
        "septiembre" => Some(9),
        "octubre" => Some(10),
        "noviembre" => Some(11),
        "diciembre" => Some(12),
        _ => None,
    }
}

/// Spanish name of a 1-12 month number.
#[must_use]
pub const fn month_name(month: u32) -> Option<&'static str> {
    match month {
        1 => Some("enero"),
        2 => Some("febrero"),
        3 => Some("marzo"),
        4 => Some("abril"),
        5 => Some("mayo"),
        6 => Some("junio"),
        7 => Some("julio"),
        8 => Some("agosto"),
        9 => Some("septiembre"),
        10 => Some("octubre"),
        11 => Some("noviembre"),
        12 => Some("diciembre"),
        _ => None,
    }
}

/// Parse a lowercased Spanish weekday name, accent-insensitive.
#[must_use]
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "lunes" => Some(Weekday::Mon),
        "martes" => Some(Weekday::Tue),
        "miércoles" | "miercoles" => Some(Weekday::Wed),
        "jueves" => Some(Weekday::Thu),
        "viernes" => Some(Weekday::Fri),
        "sábado" | "sabado" => Some(Weekday::Sat),
        "domingo" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Spanish name of a weekday, accented.
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}
