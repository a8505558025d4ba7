//! The tokenizer: raw input to a classified token stream.
//!
//! Tokenizing is total: it never fails. Characters that fit no category
//! become [`TokenKind::Illegal`] tokens and surface later as grammar-level
//! errors. The scanner works over `char`s so accented vowels and ñ/ü are
//! handled like any other letter.

use crate::core::token::{classify_word, is_period_word, Token, TokenKind};

/// Split raw input into tokens, always ending with an `Eof` marker.
///
/// Empty or whitespace-only input yields just the `Eof` marker; the parser
/// maps that to the dedicated empty-command error.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}

/// Character scanner over the input.
struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consume a run of letters (including Spanish accented vowels, ñ, ü).
    fn read_word(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_word_char) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// Consume a run of ASCII digits.
    fn read_number(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.peek() else {
            return Token::eof();
        };

        if ch == ':' {
            self.pos += 1;
            return Token::new(TokenKind::Colon, ":");
        }

        if is_word_char(ch) {
            let word = self.read_word();
            // "a" starts a tentative peek for "las"; on match the two words
            // join into one token, otherwise "a" stays a generic word.
            if word.to_lowercase() == "a" {
                let snapshot = self.pos;
                self.skip_whitespace();
                let next = self.read_word();
                if next.to_lowercase() == "las" {
                    return Token::new(TokenKind::ALas, format!("{word} {next}"));
                }
                self.pos = snapshot;
            }
            return Token::new(classify_word(&word), word);
        }

        if ch.is_ascii_digit() {
            let number = self.read_number();
            // A digit run glued to am/pm/hs/horas is one period token.
            if self.peek().is_some_and(is_word_char) {
                let snapshot = self.pos;
                let suffix = self.read_word();
                if is_period_word(&suffix.to_lowercase()) {
                    return Token::new(TokenKind::Period, format!("{number}{suffix}"));
                }
                self.pos = snapshot;
            }
            return Token::new(TokenKind::Number, number);
        }

        self.pos += 1;
        Token::new(TokenKind::Illegal, ch.to_string())
    }
}

/// Letters accepted inside a word: ASCII letters plus áéíóúñü (both cases).
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            'á' | 'é' | 'í' | 'ó' | 'ú' | 'ñ' | 'ü' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'Ñ' | 'Ü'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("   \t\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_simple_command() {
        assert_eq!(
            kinds("agendá reunión hoy"),
            vec![
                TokenKind::Verb,
                TokenKind::EventNoun,
                TokenKind::RelativeDate,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_a_las_joins_into_one_token() {
        let tokens = tokenize("anotá comprar leche mañana a las 10:30");
        let a_las = tokens
            .iter()
            .find(|t| t.kind == TokenKind::ALas)
            .unwrap();
        assert_eq!(a_las.text, "a las");
        assert_eq!(
            kinds("anotá comprar leche mañana a las 10:30"),
            vec![
                TokenKind::Verb,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::RelativeDate,
                TokenKind::ALas,
                TokenKind::Number,
                TokenKind::Colon,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_a_las_keeps_original_casing() {
        let tokens = tokenize("agendá reunión A LAS 10");
        assert_eq!(tokens[2].kind, TokenKind::ALas);
        assert_eq!(tokens[2].text, "A LAS");
    }

    #[test]
    fn test_lone_a_stays_a_word() {
        assert_eq!(
            kinds("agendá viaje a Córdoba"),
            vec![
                TokenKind::Verb,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_a_at_end_of_input() {
        assert_eq!(
            kinds("anotá ir a"),
            vec![TokenKind::Verb, TokenKind::Word, TokenKind::Word, TokenKind::Eof]
        );
    }

    #[test]
    fn test_explicit_date_tokens() {
        assert_eq!(
            kinds("recordame llamar doctor 15 de marzo 2024"),
            vec![
                TokenKind::Verb,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Number,
                TokenKind::De,
                TokenKind::Month,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_attached_period_is_one_token() {
        let tokens = tokenize("a las 10am");
        assert_eq!(tokens[1].kind, TokenKind::Period);
        assert_eq!(tokens[1].text, "10am");
    }

    #[test]
    fn test_detached_period_word() {
        assert_eq!(
            kinds("a las 10 pm"),
            vec![TokenKind::ALas, TokenKind::Number, TokenKind::Period, TokenKind::Eof]
        );
    }

    #[test]
    fn test_digits_glued_to_plain_letters_split() {
        assert_eq!(
            kinds("15kg"),
            vec![TokenKind::Number, TokenKind::Word, TokenKind::Eof]
        );
    }

    #[test]
    fn test_illegal_characters() {
        let tokens = tokenize("agendá reunión!");
        assert_eq!(tokens[2].kind, TokenKind::Illegal);
        assert_eq!(tokens[2].text, "!");
    }

    #[test]
    fn test_casing_preserved_in_lexeme() {
        let tokens = tokenize("Agendá Reunión");
        assert_eq!(tokens[0].kind, TokenKind::Verb);
        assert_eq!(tokens[0].text, "Agendá");
        assert_eq!(tokens[1].text, "Reunión");
    }

    #[test]
    fn test_accented_generic_word() {
        let tokens = tokenize("anotá cumpleaños de Begoña");
        assert_eq!(tokens[1].kind, TokenKind::Word);
        assert_eq!(tokens[1].text, "cumpleaños");
        assert_eq!(tokens[3].text, "Begoña");
    }
}
