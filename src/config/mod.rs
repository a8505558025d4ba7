//! Configuration for mandato: file paths and user settings.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::Config;
