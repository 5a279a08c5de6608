//! Configuration file handling
//!
//! Optional JSON file; every field has a default. Command-line flags
//! override file values.
//!
//! ```json
//! {
//!   "neo_file": "data/neos.csv",
//!   "cad_file": "data/cad.json",
//!   "link_all": false,
//!   "log_level": "info"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::link::AppendPolicy;
use crate::observability::Severity;

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// NEO CSV path
    #[serde(default = "default_neo_file")]
    pub neo_file: PathBuf,

    /// Close-approach JSON path
    #[serde(default = "default_cad_file")]
    pub cad_file: PathBuf,

    /// Record every approach in its body's list (default: first only)
    #[serde(default)]
    pub link_all: bool,

    /// Minimum log severity
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_neo_file() -> PathBuf {
    PathBuf::from("data/neos.csv")
}
fn default_cad_file() -> PathBuf {
    PathBuf::from("data/cad.json")
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neo_file: default_neo_file(),
            cad_file: default_cad_file(),
            link_all: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Build the effective configuration: defaults, then file, then flags.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(path) = &cli.neofile {
            config.neo_file = path.clone();
        }
        if let Some(path) = &cli.cadfile {
            config.cad_file = path.clone();
        }
        if cli.link_all {
            config.link_all = true;
        }
        if let Some(level) = &cli.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.neo_file.as_os_str().is_empty() {
            return Err(CliError::config_error("neo_file must not be empty"));
        }
        if self.cad_file.as_os_str().is_empty() {
            return Err(CliError::config_error("cad_file must not be empty"));
        }
        self.severity()?;
        Ok(())
    }

    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(CliError::config_error)
    }

    pub fn append_policy(&self) -> AppendPolicy {
        if self.link_all {
            AppendPolicy::All
        } else {
            AppendPolicy::FirstOnly
        }
    }
}
