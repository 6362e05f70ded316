//! Error types for the fallible edges of the crate.
//!
//! Resolution itself never fails. Errors only arise while tokenising
//! command-line arguments or reading a configuration file into a
//! [`SharedConfig`](crate::SharedConfig).

use std::path::PathBuf;

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors raised while gathering the inputs to a resolution pass.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogFlagsError {
    /// Error parsing command-line arguments.
    #[error("Failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),

    /// Error reading a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying error reported while reading the file.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error extracting the record from configuration providers.
    #[error("Failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),
}

impl From<clap::Error> for LogFlagsError {
    fn from(err: clap::Error) -> Self {
        Self::CliParsing(Box::new(err))
    }
}

impl From<FigmentError> for LogFlagsError {
    fn from(err: FigmentError) -> Self {
        Self::Gathering(Box::new(err))
    }
}

/// Result alias for operations that may return a [`LogFlagsError`].
pub type LogFlagsResult<T> = Result<T, LogFlagsError>;
