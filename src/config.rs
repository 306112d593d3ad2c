//! # Configuration
//!
//! The JSON configuration artifact for the service: HTTP bind settings,
//! the credential table, and ingestion paths. The credential table lives
//! here, never in code.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::auth::Credential;
use crate::server::HttpConfig;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Validation(String),
}

/// Ingestion paths.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// SMS export consumed at startup.
    #[serde(default = "default_xml_path")]
    pub xml_path: String,

    /// Readable JSON copy of the extracted seed.
    #[serde(default = "default_artifact_path")]
    pub artifact_path: String,
}

fn default_xml_path() -> String {
    "data/raw/momo.xml".to_string()
}

fn default_artifact_path() -> String {
    "data/processed/api_transactions.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            xml_path: default_xml_path(),
            artifact_path: default_artifact_path(),
        }
    }
}

/// Service configuration file structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP bind and CORS settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Accepted username/password pairs. Required: the gate refuses to run
    /// with an empty table.
    #[serde(default)]
    pub credentials: Vec<Credential>,

    /// Ingestion paths.
    #[serde(default)]
    pub data: DataConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.credentials.is_empty() {
            return Err(ConfigError::Validation(
                "at least one credential pair is required".to_string(),
            ));
        }

        for credential in &self.credentials {
            if credential.username.is_empty() {
                return Err(ConfigError::Validation(
                    "credential usernames must not be empty".to_string(),
                ));
            }
            // The decoded pair splits on the first ':'.
            if credential.username.contains(':') {
                return Err(ConfigError::Validation(format!(
                    "credential username '{}' must not contain ':'",
                    credential.username
                )));
            }
        }

        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port must be > 0".to_string()));
        }

        Ok(())
    }
}
