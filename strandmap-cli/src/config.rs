//! Configuration handling for the strandmap CLI
//!
//! Supports loading configuration from strandmap.toml files with CLI
//! argument overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

/// Configuration file looked up in the working directory when no explicit
/// path is given.
pub const DEFAULT_CONFIG_FILE: &str = "strandmap.toml";

/// Input/output defaults used when neither the CLI nor the configuration
/// file names a path.
pub const DEFAULT_REFERENCE: &str = "reference2.txt";
pub const DEFAULT_QUERY: &str = "query2.txt";
pub const DEFAULT_OUTPUT: &str = "ans2.txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub io: IoConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// Reference input path
    pub reference: PathBuf,

    /// Query input path
    pub query: PathBuf,

    /// Output path for segment records
    pub output: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            reference: PathBuf::from(DEFAULT_REFERENCE),
            query: PathBuf::from(DEFAULT_QUERY),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Print per-anchor progress lines to stdout during the search
    pub progress: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { progress: true }
    }
}

impl Config {
    /// Load configuration: an explicit path must parse, the default file is
    /// used when present, and built-in defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> CliResult<Config> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            CliError::config(format!("cannot read {}: {}", path.display(), err))
        })?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}
