//! Configuration management for otpdeck.
//!
//! Loads configuration from ${OTPDECK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether a scan-capable input source is available to the host.
    ///
    /// Camera/QR detection itself lives outside this crate; the host maps
    /// whatever capability probe it has onto this flag. Terminals default
    /// to false, so new entries open the manual form.
    pub scanner_available: bool,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path`.
    ///
    /// Fails if a config file already exists there.
    pub fn init_at(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

/// Default config file contents, with every field present and documented.
fn default_config_template() -> &'static str {
    "\
# otpdeck configuration

# Whether a scan-capable input source is available.
# When false, adding a credential opens the manual entry form.
scanner_available = false
"
}

pub mod paths {
    //! Path resolution for otpdeck configuration and data directories.
    //!
    //! OTPDECK_HOME resolution order:
    //! 1. OTPDECK_HOME environment variable (if set)
    //! 2. ~/.config/otpdeck (default)

    use std::path::PathBuf;

    /// Returns the otpdeck home directory.
    ///
    /// Checks OTPDECK_HOME env var first, falls back to ~/.config/otpdeck
    pub fn otpdeck_home() -> PathBuf {
        if let Ok(home) = std::env::var("OTPDECK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("otpdeck"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        otpdeck_home().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(!config.scanner_available);
    }

    #[test]
    fn test_parse_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scanner_available = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.scanner_available);
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        assert!(!config.scanner_available);
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::init_at(&path).unwrap();
        assert!(path.exists());
        assert!(Config::init_at(&path).is_err());
    }
}
