use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3043";
pub const DEFAULT_SECRETS_PATH: &str = "secrets.toml";
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

pub const API_KEY_VAR: &str = "PSI_API_KEY";
pub const SECRETS_PATH_VAR: &str = "PSI_SECRETS_PATH";
pub const ENDPOINT_VAR: &str = "PSI_ENDPOINT";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read secrets file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse secrets file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// Layout of the secrets file; only the key is read
#[derive(Deserialize, Debug, Default)]
struct Secrets {
    #[serde(rename = "PSI_API_KEY")]
    psi_api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub bind_addr: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Resolve the configuration from the process environment.
    ///
    /// The API key comes from the secrets file first and the `PSI_API_KEY`
    /// variable second. Running without a key is valid, only the quota is lower.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secrets_path = std::env::var(SECRETS_PATH_VAR)
            .unwrap_or_else(|_| DEFAULT_SECRETS_PATH.to_string());

        let api_key = match load_secrets_key(Path::new(&secrets_path))? {
            Some(key) => {
                debug!("API key resolved from secrets file {}", secrets_path);
                Some(key)
            }
            None => non_blank(std::env::var(API_KEY_VAR).ok()),
        };

        let config = Config {
            api_key,
            endpoint: std::env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            bind_addr: std::env::var(BIND_ADDR_VAR)
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            ..Config::default()
        };

        if config.api_key.is_none() {
            info!("No {} configured; running with the anonymous quota", API_KEY_VAR);
        }
        Ok(config)
    }
}

/// Read `PSI_API_KEY` from a TOML secrets file. A missing file is not an error.
pub fn load_secrets_key(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let secrets: Secrets = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(non_blank(secrets.psi_api_key))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
