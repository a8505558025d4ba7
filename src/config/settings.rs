//! Configuration settings for mandato.
//!
//! Settings are loaded from `~/.mandato/config.yaml`. A missing file means
//! defaults: Buenos Aires time, pretty output.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::MandatoError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// UTC offset in hours applied when the caller supplies no explicit
    /// offset. -3 is America/Argentina/Buenos_Aires (no DST).
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_utc_offset_hours() -> i32 {
    -3
}

impl Config {
    /// Load configuration, falling back to defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(paths: &Paths) -> Result<Self, MandatoError> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&paths.config_file)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// The configured offset as a chrono `FixedOffset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hours do not form a valid offset.
    pub fn offset(&self) -> Result<FixedOffset, MandatoError> {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                MandatoError::Config(format!(
                    "Invalid UTC offset: {} hours",
                    self.utc_offset_hours
                ))
            })
    }
}
