//! Error types for configuration and board document handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors that can occur while reading or writing a board document.
#[derive(Error, Debug)]
pub enum BoardFileError {
    /// Board file could not be read.
    #[error("failed to read board file: {path}")]
    Read {
        /// Path to the board file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Board file could not be parsed.
    #[error("failed to parse board file: {path}")]
    Parse {
        /// Path to the board file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Board document could not be serialised.
    #[error("failed to serialise board file: {path}")]
    Serialise {
        /// Path the board was being written to.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Board file could not be written.
    #[error("failed to write board file: {path}")]
    Write {
        /// Path to the board file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Backup of the previous board file could not be created.
    #[error("failed to back up board file to: {path}")]
    Backup {
        /// Path to the backup file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// No component with the requested reference designator.
    #[error("no component with reference '{reference}' on the board")]
    ComponentNotFound {
        /// Reference designator that was looked up.
        reference: String,
    },
}
