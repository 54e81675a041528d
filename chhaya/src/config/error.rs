//! Configuration loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Config load error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or type error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of its allowed range
    #[error("invalid value: {0}")]
    Invalid(String),
}
