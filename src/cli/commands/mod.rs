//! Command handlers: each returns the formatted output string.

mod analyze;
mod tokens;

pub use analyze::analyze;
pub use tokens::tokens;
