//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving a [`SheetConfig`](crate::SheetConfig)
///
/// The gesture and animation paths never fail; only configuration IO does.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read or written
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for a sheet configuration
    #[error("Failed to parse sheet config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Failed to serialize sheet config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
