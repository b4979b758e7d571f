//! Error handling for the strandmap CLI

use std::path::PathBuf;

use strandmap_core::SearchError;
use thiserror::Error;

/// Main error type for strandmap CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot open input file: {path}")]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No alignment found.")]
    NoAlignment,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Process exit status for this error: an exhausted search exits 2,
    /// everything else (missing inputs, configuration, I/O) exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NoAlignment => 2,
            _ => 1,
        }
    }
}

impl From<SearchError> for CliError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Exhausted => Self::NoAlignment,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("TOML parsing error: {}", err))
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
