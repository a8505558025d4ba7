//! Command-line interface for mandato.

pub mod args;
pub mod commands;
