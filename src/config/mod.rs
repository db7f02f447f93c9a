//! Configuration file loading and parsing.
//!
//! # Configuration File Locations
//!
//! The configuration file is searched in the following order:
//!
//! 1. Path specified via `--config` CLI flag
//! 2. Default location:
//!    - **Linux/macOS:** `~/.fpcycle/config.json`
//!    - **Windows:** `%USERPROFILE%\.fpcycle\config.json`
//!
//! A missing file at the default location is not an error; defaults apply
//! and the footprint library root may come from the environment instead.
//!
//! # Library Root Resolution
//!
//! The footprint library root is taken from, in order of precedence: the
//! `--library-root` CLI flag, the `library_root` config key, and the
//! `FPCYCLE_FOOTPRINT_DIR` environment variable.

mod settings;

pub use settings::{Config, LoggingConfig, SortConfig};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable naming the footprint library root directory.
pub const ENV_LIBRARY_ROOT: &str = "FPCYCLE_FOOTPRINT_DIR";

/// Returns the default configuration directory.
///
/// - **Linux/macOS:** `~/.fpcycle/`
/// - **Windows:** `%USERPROFILE%\.fpcycle\`
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".fpcycle"))
}

/// Returns the platform-specific default configuration file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join("config.json"))
}

/// Loads and parses the configuration file.
///
/// If `path` is `None`, uses the platform-specific default location; a
/// missing file there yields the default configuration. An explicitly given
/// path must exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given configuration file cannot be found
/// - The file cannot be read
/// - The JSON is malformed
/// - Validation fails
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound {
                    path: p.to_path_buf(),
                });
            }
            p.to_path_buf()
        }
        None => {
            let Some(default) = default_config_path() else {
                return Ok(Config::default());
            };
            if !default.exists() {
                return Ok(Config::default());
            }
            default
        }
    };

    let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;

    let config: Config = serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: config_path.clone(),
        source: e,
    })?;

    // Validate the configuration
    config.validate()?;

    Ok(config)
}

/// Resolves the footprint library root: CLI flag, then config file, then the
/// [`ENV_LIBRARY_ROOT`] environment variable.
#[must_use]
pub fn resolve_library_root(cli: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    cli.or_else(|| config.library_root.clone())
        .or_else(|| std::env::var_os(ENV_LIBRARY_ROOT).map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_dir_exists() {
        assert!(default_config_dir().is_some());
    }

    #[test]
    fn default_config_path_exists() {
        let path = default_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("config.json"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let result = load_config(Some(Path::new("/definitely/not/here.json")));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    fn config_with_root() -> Config {
        serde_json::from_str(r#"{"library_root": "/from/config"}"#).unwrap()
    }

    #[test]
    fn cli_flag_wins_over_config() {
        let resolved =
            resolve_library_root(Some(PathBuf::from("/from/cli")), &config_with_root());
        assert_eq!(resolved, Some(PathBuf::from("/from/cli")));
    }

    #[test]
    fn config_used_when_no_cli_flag() {
        assert_eq!(
            resolve_library_root(None, &config_with_root()),
            Some(PathBuf::from("/from/config"))
        );
    }
}
