//! Error types for the MockFactory CLI.

use mockfactory_client::{ApiError, UnsupportedLanguage};
use mockfactory_config::ConfigError;

/// Errors that can occur during CLI operations.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The command line was used incorrectly (conflicting or missing args).
    #[error("{0}")]
    Usage(String),

    /// The requested language or file extension is not supported.
    #[error(transparent)]
    Language(#[from] UnsupportedLanguage),

    /// A backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The config or credential store failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A local file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output formatting failed.
    #[error("output error: {0}")]
    Format(String),

    /// An argument value was rejected after parsing.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Usage mistakes exit with 2, matching the parser's own convention;
    /// everything else exits with 1.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}
