//! mandato - a Spanish natural-language agenda command analyzer
//!
//! This crate compiles free-text Spanish commands such as
//! "agendá reunión con Juan el viernes a las 15:30" into structured,
//! time-resolved event or reminder records.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;

pub use crate::cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{
    analyze, resolve, tokenize, ActionKind, DateExpr, ParsedCommand, ResolvedAction, TimeExpr,
};
pub use crate::error::{ErrorKind, MandatoError};
