// ./src/error.rs
//! Error types for the pre-flight checks
//!
//! Validation failures carry a fixed, human-readable message. Measurement
//! failures from the filesystem are passed through untouched.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Node configuration failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Node configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors reported by `validate` and `validate_allocation`
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ValidationError {
    /// Payout address failed format or checksum validation
    #[error("Invalid payment address")]
    InvalidAddress,

    /// Storage path does not exist or cannot be stat'ed
    #[error("Invalid storage path")]
    InvalidPath,

    /// Allocation does not parse to a positive byte count
    #[error("Invalid storage size")]
    InvalidSizeFormat,

    /// Allocation exceeds free space plus space already used by the node
    #[error("Invalid storage size")]
    InsufficientCapacity,

    /// Free-space or directory-size measurement failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ValidationError {
    /// True for failures the operator fixes by editing the configuration,
    /// as opposed to filesystem errors hit while measuring.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, ValidationError::Io(_))
    }
}

/// Errors that can occur while loading a configuration file
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML or is missing a field
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
