//! The command compiler: tokenizer, grammar parser, temporal resolver.
//!
//! Everything in here is a pure function over immutable values; the
//! reference instant and timezone travel as explicit parameters.

mod command;
mod lexer;
mod parser;
mod resolver;
pub mod token;

pub use command::{ActionKind, DateExpr, ParsedCommand, PeriodMarker, ResolvedAction, TimeExpr};
pub use lexer::tokenize;
pub use parser::{parse_command, parse_tokens};
pub use resolver::{analyze, resolve};
pub use token::{Token, TokenKind};
