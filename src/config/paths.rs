//! Path resolution for mandato configuration files.
//!
//! All mandato data is stored in `~/.mandato/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::MandatoError;

/// Paths to mandato configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.mandato/`
    pub root: PathBuf,
    /// Config file: `~/.mandato/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, MandatoError> {
        let home = std::env::var("HOME")
            .map_err(|_| MandatoError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".mandato");

        Ok(Self {
            config_file: root.join("config.yaml"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root() {
        let paths = Paths::with_root(PathBuf::from("/tmp/mandato-test"));
        assert_eq!(paths.root, PathBuf::from("/tmp/mandato-test"));
        assert_eq!(
            paths.config_file,
            PathBuf::from("/tmp/mandato-test/config.yaml")
        );
    }
}
