use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating collector configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read API key file {path}: {source}")]
    ApiKeyFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API key file {0} is empty")]
    EmptyApiKey(PathBuf),

    #[error("invalid coordinates \"{input}\": {reason}")]
    InvalidCoordinates { input: String, reason: String },

    #[error("validation error: {0}")]
    Validation(String),
}
